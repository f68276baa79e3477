use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API responded with status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ClientError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ClientError::ApiError(e) if e.is_timeout() || e.is_connect() => ErrorSeverity::Medium,
            ClientError::ApiError(_) => ErrorSeverity::High,
            ClientError::HttpStatus { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            ClientError::HttpStatus { .. } => ErrorSeverity::High,
            ClientError::SerializationError(_) => ErrorSeverity::High,
            ClientError::IoError(_)
            | ClientError::ConfigError { .. }
            | ClientError::MissingConfigError { .. }
            | ClientError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClientError::ApiError(e) if e.is_timeout() => "The API did not respond in time".to_string(),
            ClientError::ApiError(_) => "Could not reach the API".to_string(),
            ClientError::HttpStatus { status: 401, .. } => "The access token was rejected".to_string(),
            ClientError::HttpStatus { status: 404, .. } => "The account was not found".to_string(),
            ClientError::HttpStatus { status, .. } => format!("The API returned HTTP {}", status),
            ClientError::IoError(e) => format!("Could not read local file: {}", e),
            ClientError::SerializationError(_) => "The API response had an unexpected shape".to_string(),
            ClientError::ConfigError { message } => message.clone(),
            ClientError::MissingConfigError { field } => format!("{} is required", field),
            ClientError::InvalidConfigValueError { field, reason, .. } => {
                format!("{}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ClientError::ApiError(_) => "Check --base-url and your network connection",
            ClientError::HttpStatus { status: 401 | 403, .. } => {
                "Pass a valid token with --access-token or API_ACCESS_TOKEN"
            }
            ClientError::HttpStatus { status: 404, .. } => "Check the account id",
            ClientError::HttpStatus { status, .. } if *status >= 500 => "Try again later",
            ClientError::HttpStatus { .. } => "Check the request parameters",
            ClientError::IoError(_) => "Check that the file exists and is readable",
            ClientError::SerializationError(_) => "Check --api-version against the server",
            ClientError::ConfigError { .. }
            | ClientError::MissingConfigError { .. }
            | ClientError::InvalidConfigValueError { .. } => {
                "Fix the command line flags or the config file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
