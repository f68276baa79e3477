use crate::domain::model::{CacheKeys, CreateAccountRequest, LogoFile};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const DEFAULT_API_VERSION: &str = "/api/v1";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn api_version(&self) -> &str;
    /// Account the client is scoped to, used by calls that act on the current account.
    fn account_id(&self) -> Option<u64>;
    fn access_token(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
}

#[async_trait]
pub trait AccountApi: Send + Sync {
    async fn create_account(&self, request: &CreateAccountRequest) -> Result<serde_json::Value>;
    async fn get_cache_keys(&self) -> Result<CacheKeys>;
    async fn update_logo(&self, account_id: u64, logo: LogoFile) -> Result<serde_json::Value>;
    async fn delete_logo(&self, account_id: u64) -> Result<()>;
}
