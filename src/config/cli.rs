use crate::config::toml_config::{validate_provider, TomlConfig};
use crate::domain::model::CreateAccountRequest;
use crate::domain::ports::{ConfigProvider, DEFAULT_API_VERSION, DEFAULT_TIMEOUT_SECONDS};
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "account-client")]
#[command(about = "Command line client for the account REST endpoints")]
pub struct CliConfig {
    #[arg(long, global = true, env = "ACCOUNT_CLIENT_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(long, global = true)]
    pub api_version: Option<String>,

    /// Account the client acts on when a command does not name one
    #[arg(long, global = true)]
    pub account_id: Option<u64>,

    #[arg(long, global = true, env = "API_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, global = true, help = "Read client settings from a TOML file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create a new account
    CreateAccount {
        #[arg(long)]
        account_name: String,
        #[arg(long)]
        user_full_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        locale: Option<String>,
    },
    /// Print the cache keys of the current account
    CacheKeys,
    /// Upload a new logo
    UpdateLogo {
        /// Image file to upload
        path: PathBuf,
        #[arg(long)]
        account: Option<u64>,
    },
    /// Remove the logo
    DeleteLogo {
        #[arg(long)]
        account: Option<u64>,
    },
}

impl CliConfig {
    /// Fills settings not given on the command line from the TOML file, if any.
    pub fn merge_config_file(&mut self) -> Result<()> {
        let Some(path) = self.config.clone() else {
            return Ok(());
        };

        tracing::debug!("Loading client settings from {}", path.display());
        let file = TomlConfig::from_file(&path)?;
        self.merge_toml(file);
        Ok(())
    }

    pub fn merge_toml(&mut self, file: TomlConfig) {
        let client = file.client;
        self.base_url = self.base_url.take().or(client.base_url);
        self.api_version = self.api_version.take().or(client.api_version);
        self.account_id = self.account_id.or(client.account_id);
        self.access_token = self.access_token.take().or(client.access_token);
        self.timeout_seconds = self.timeout_seconds.or(client.timeout_seconds);
    }

    /// Explicit `--account` wins over the scoped `--account-id`.
    pub fn target_account(&self, explicit: Option<u64>) -> Result<u64> {
        let account = explicit.or(self.account_id);
        let account_id = *validation::validate_required_field("account_id", &account)?;
        validation::validate_range("account_id", account_id, 1, u64::MAX)?;
        Ok(account_id)
    }
}

impl Command {
    pub fn create_account_request(&self) -> Option<CreateAccountRequest> {
        match self {
            Command::CreateAccount {
                account_name,
                user_full_name,
                email,
                password,
                locale,
            } => Some(CreateAccountRequest {
                account_name: account_name.clone(),
                user_full_name: user_full_name.clone(),
                email: email.clone(),
                password: password.clone(),
                locale: locale.clone(),
            }),
            _ => None,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or_default()
    }

    fn api_version(&self) -> &str {
        self.api_version.as_deref().unwrap_or(DEFAULT_API_VERSION)
    }

    fn account_id(&self) -> Option<u64> {
        self.account_id
    }

    fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)?;

        if let Command::CreateAccount { account_name, .. } = &self.command {
            validation::validate_non_empty_string("account_name", account_name)?;
        }
        Ok(())
    }
}
