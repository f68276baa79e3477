pub mod api;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use api::{AccountClient, ApiClient};
pub use config::TomlConfig;
pub use domain::model::{CacheKeys, CreateAccountRequest, LogoFile};
pub use domain::ports::{AccountApi, ConfigProvider};
pub use utils::error::{ClientError, Result};
