use crate::api::client::ApiClient;
use crate::domain::model::{CacheKeys, CacheKeysResponse, CreateAccountRequest, LogoFile};
use crate::domain::ports::{AccountApi, ConfigProvider};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

/// Client for the `/accounts` resource.
#[derive(Debug, Clone)]
pub struct AccountClient {
    api: ApiClient,
}

impl AccountClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        Ok(Self::new(ApiClient::new(config)?))
    }

    fn account_url(&self, account_id: u64) -> String {
        self.api.url(&format!("/accounts/{}", account_id))
    }
}

#[async_trait]
impl AccountApi for AccountClient {
    async fn create_account(&self, request: &CreateAccountRequest) -> Result<serde_json::Value> {
        let url = self.api.url("/accounts");
        let response = self
            .api
            .execute(self.api.http().post(&url).json(request))
            .await?;

        tracing::info!("Created account {}", request.account_name);
        Ok(response.json().await?)
    }

    async fn get_cache_keys(&self) -> Result<CacheKeys> {
        let account_id = self.api.current_account_id()?;
        let url = format!("{}/cache_keys", self.account_url(account_id));
        let response = self.api.execute(self.api.http().get(&url)).await?;

        // Read as text first so a shape mismatch surfaces as a serde error.
        let body = response.text().await?;
        let parsed: CacheKeysResponse = serde_json::from_str(&body)?;
        tracing::debug!("Account {} has {} cache keys", account_id, parsed.cache_keys.len());
        Ok(parsed.cache_keys)
    }

    async fn update_logo(&self, account_id: u64, logo: LogoFile) -> Result<serde_json::Value> {
        let size = logo.bytes.len();
        let part = Part::bytes(logo.bytes)
            .file_name(logo.file_name)
            .mime_str(&logo.content_type)?;
        let form = Form::new().part("logo", part);

        let url = self.account_url(account_id);
        let response = self
            .api
            .execute(self.api.http().patch(&url).multipart(form))
            .await?;

        tracing::info!("Uploaded logo ({} bytes) for account {}", size, account_id);
        Ok(response.json().await?)
    }

    async fn delete_logo(&self, account_id: u64) -> Result<()> {
        let url = format!("{}/logo", self.account_url(account_id));
        self.api.execute(self.api.http().delete(&url)).await?;

        tracing::info!("Deleted logo for account {}", account_id);
        Ok(())
    }
}
