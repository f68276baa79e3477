use account_client::utils::error::{ClientError, ErrorSeverity};
use account_client::utils::{logger, validation::Validate};
use account_client::{AccountApi, AccountClient, CliConfig, Command, LogoFile};
use clap::Parser;

#[tokio::main]
async fn main() {
    let mut config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if let Err(e) = run(&mut config).await {
        tracing::error!(
            "❌ {} failed: {} (Severity: {:?})",
            command_name(&config.command),
            e,
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

async fn run(config: &mut CliConfig) -> Result<(), ClientError> {
    config.merge_config_file()?;
    config.validate()?;
    tracing::debug!(
        "Using {}{} (account: {:?})",
        config.base_url.as_deref().unwrap_or_default(),
        account_client::ConfigProvider::api_version(&*config),
        config.account_id
    );

    let client = AccountClient::from_config(&*config)?;

    match &config.command {
        Command::CreateAccount { .. } => {
            let request = config
                .command
                .create_account_request()
                .ok_or_else(|| ClientError::ConfigError {
                    message: "create-account needs an account name".to_string(),
                })?;
            let created = client.create_account(&request).await?;
            println!("{}", serde_json::to_string_pretty(&created)?);
        }
        Command::CacheKeys => {
            let keys = client.get_cache_keys().await?;
            for (resource, key) in keys.iter() {
                println!("{}\t{}", resource, key);
            }
        }
        Command::UpdateLogo { path, account } => {
            let account_id = config.target_account(*account)?;
            let logo = LogoFile::from_path(path).await?;
            let updated = client.update_logo(account_id, logo).await?;
            println!("{}", serde_json::to_string_pretty(&updated)?);
        }
        Command::DeleteLogo { account } => {
            let account_id = config.target_account(*account)?;
            client.delete_logo(account_id).await?;
            println!("✅ Logo removed from account {}", account_id);
        }
    }

    Ok(())
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::CreateAccount { .. } => "create-account",
        Command::CacheKeys => "cache-keys",
        Command::UpdateLogo { .. } => "update-logo",
        Command::DeleteLogo { .. } => "delete-logo",
    }
}
