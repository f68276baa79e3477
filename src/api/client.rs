use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ClientError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;

const ACCESS_TOKEN_HEADER: &str = "api_access_token";

/// Shared plumbing for the REST resources: base URL, version prefix,
/// the scoped account and request signing.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_version: String,
    account_id: Option<u64>,
}

impl ApiClient {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = config.access_token() {
            let mut value =
                HeaderValue::from_str(token).map_err(|_| ClientError::InvalidConfigValueError {
                    field: "access_token".to_string(),
                    value: "<redacted>".to_string(),
                    reason: "Token contains characters not allowed in a header".to_string(),
                })?;
            value.set_sensitive(true);
            headers.insert(ACCESS_TOKEN_HEADER, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            api_version: config.api_version().to_string(),
            account_id: config.account_id(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.api_version, path)
    }

    pub fn current_account_id(&self) -> Result<u64> {
        self.account_id.ok_or_else(|| ClientError::MissingConfigError {
            field: "account_id".to_string(),
        })
    }

    pub fn http(&self) -> &Client {
        &self.client
    }

    /// Sends the request and turns any non-2xx status into `HttpStatus`.
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        tracing::debug!("{} {}", method, url);
        let response = self.client.execute(request).await?;
        let status = response.status();
        tracing::debug!("{} {} -> {}", method, url, status);

        if status.is_success() {
            Ok(response)
        } else {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!("{} {}: could not read error body: {}", method, url, e);
                    String::new()
                }
            };
            tracing::warn!("{} {} failed with status {}", method, url, status);
            Err(ClientError::HttpStatus {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockConfig {
        base_url: String,
        account_id: Option<u64>,
        access_token: Option<String>,
    }

    impl ConfigProvider for MockConfig {
        fn base_url(&self) -> &str {
            &self.base_url
        }

        fn api_version(&self) -> &str {
            "/api/v1"
        }

        fn account_id(&self) -> Option<u64> {
            self.account_id
        }

        fn access_token(&self) -> Option<&str> {
            self.access_token.as_deref()
        }

        fn timeout_seconds(&self) -> u64 {
            5
        }
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let config = MockConfig {
            base_url: "https://app.example.com/".to_string(),
            account_id: None,
            access_token: None,
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(
            client.url("/accounts"),
            "https://app.example.com/api/v1/accounts"
        );
    }

    #[test]
    fn test_current_account_id_missing() {
        let config = MockConfig {
            base_url: "https://app.example.com".to_string(),
            account_id: None,
            access_token: None,
        };
        let client = ApiClient::new(&config).unwrap();
        assert!(matches!(
            client.current_account_id(),
            Err(ClientError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_rejects_token_with_newline() {
        let config = MockConfig {
            base_url: "https://app.example.com".to_string(),
            account_id: Some(1),
            access_token: Some("bad\ntoken".to_string()),
        };
        assert!(matches!(
            ApiClient::new(&config),
            Err(ClientError::InvalidConfigValueError { .. })
        ));
    }
}
