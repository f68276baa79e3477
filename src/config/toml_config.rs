use crate::domain::ports::{ConfigProvider, DEFAULT_API_VERSION, DEFAULT_TIMEOUT_SECONDS};
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub client: ClientSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientSection {
    pub base_url: Option<String>,
    pub api_version: Option<String>,
    pub account_id: Option<u64>,
    pub access_token: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClientError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ClientError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_ACCESS_TOKEN})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ClientError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        self.client.base_url.as_deref().unwrap_or_default()
    }

    fn api_version(&self) -> &str {
        self.client
            .api_version
            .as_deref()
            .unwrap_or(DEFAULT_API_VERSION)
    }

    fn account_id(&self) -> Option<u64> {
        self.client.account_id
    }

    fn access_token(&self) -> Option<&str> {
        self.client.access_token.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.client.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

/// Checks shared by every configuration source.
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    if config.base_url().is_empty() {
        return Err(ClientError::MissingConfigError {
            field: "client.base_url".to_string(),
        });
    }
    validation::validate_url("client.base_url", config.base_url())?;
    validation::validate_api_version("client.api_version", config.api_version())?;
    validation::validate_range("client.timeout_seconds", config.timeout_seconds(), 1, 300)?;

    if let Some(token) = config.access_token() {
        validation::validate_non_empty_string("client.access_token", token)?;
        validation::validate_no_placeholder("client.access_token", token)?;
    }
    if let Some(account_id) = config.account_id() {
        validation::validate_range("client.account_id", account_id, 1, u64::MAX)?;
    }

    Ok(())
}
