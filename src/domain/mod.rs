// Domain layer: request/response models and the ports the API client implements.

pub mod model;
pub mod ports;
