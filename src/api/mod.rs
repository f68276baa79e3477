pub mod account;
pub mod client;

pub use account::AccountClient;
pub use client::ApiClient;
