use account_client::{
    AccountApi, AccountClient, ClientError, CreateAccountRequest, LogoFile, TomlConfig,
};
use anyhow::Result;
use httpmock::prelude::*;
use httpmock::Method::PATCH;
use tempfile::Builder;

fn client_for(server: &MockServer, extra: &str) -> Result<AccountClient> {
    let config = TomlConfig::from_toml_str(&format!(
        r#"
[client]
base_url = "{}"
{}
"#,
        server.base_url(),
        extra
    ))?;
    Ok(AccountClient::from_config(&config)?)
}

#[tokio::test]
async fn test_create_account_posts_json_payload() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/accounts")
            .header("content-type", "application/json")
            .json_body(serde_json::json!({
                "account_name": "Acme",
                "email": "owner@acme.test"
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "data": { "account_id": 17 } }));
    });

    let client = client_for(&server, "")?;
    let request = CreateAccountRequest {
        email: Some("owner@acme.test".to_string()),
        ..CreateAccountRequest::new("Acme")
    };

    let created = client.create_account(&request).await?;

    api_mock.assert();
    assert_eq!(created["data"]["account_id"], 17);
    Ok(())
}

#[tokio::test]
async fn test_get_cache_keys_uses_current_account() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/accounts/42/cache_keys");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "cache_keys": { "label": "1700000000", "inbox": "1700000100", "team": "1700000200" }
            }));
    });

    let client = client_for(&server, "account_id = 42")?;
    let keys = client.get_cache_keys().await?;

    api_mock.assert();
    assert_eq!(keys.len(), 3);
    assert_eq!(keys.get("label"), Some(&serde_json::json!("1700000000")));
    Ok(())
}

#[tokio::test]
async fn test_get_cache_keys_without_account_sends_nothing() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.path_contains("cache_keys");
        then.status(200);
    });

    let client = client_for(&server, "")?;
    let result = client.get_cache_keys().await;

    assert!(matches!(result, Err(ClientError::MissingConfigError { .. })));
    api_mock.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_get_cache_keys_rejects_unexpected_shape() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/api/v1/accounts/1/cache_keys");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "label": "1" }));
    });

    let client = client_for(&server, "account_id = 1")?;
    let result = client.get_cache_keys().await;

    assert!(matches!(result, Err(ClientError::SerializationError(_))));
    Ok(())
}

#[tokio::test]
async fn test_update_logo_sends_multipart_patch() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(PATCH)
            .path("/api/v1/accounts/7")
            .body_contains("name=\"logo\"; filename=\"brand.png\"")
            .body_contains("Content-Type: image/png")
            .body_contains("fake-png-bytes");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "id": 7, "logo": "https://cdn.example.com/brand.png" }));
    });

    let client = client_for(&server, "account_id = 1")?;
    let logo = LogoFile::new("brand.png", "image/png", b"fake-png-bytes".to_vec());

    let updated = client.update_logo(7, logo).await?;

    api_mock.assert();
    assert_eq!(updated["id"], 7);
    Ok(())
}

#[tokio::test]
async fn test_update_logo_from_file() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(PATCH)
            .path("/api/v1/accounts/3")
            .body_contains("Content-Type: image/jpeg")
            .body_contains("jpeg-data");
        then.status(200).json_body(serde_json::json!({ "id": 3 }));
    });

    let temp_file = Builder::new().suffix(".jpg").tempfile()?;
    std::fs::write(temp_file.path(), b"jpeg-data")?;

    let client = client_for(&server, "")?;
    let logo = LogoFile::from_path(temp_file.path()).await?;
    client.update_logo(3, logo).await?;

    api_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_delete_logo() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/accounts/5/logo");
        then.status(204);
    });

    let client = client_for(&server, "")?;
    client.delete_logo(5).await?;

    api_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_non_success_status_is_surfaced() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(DELETE).path("/api/v1/accounts/404/logo");
        then.status(404).body("{\"error\":\"Resource could not be found\"}");
    });

    let client = client_for(&server, "")?;
    let err = client.delete_logo(404).await.unwrap_err();

    match err {
        ClientError::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("Resource could not be found"));
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_error_status_without_body() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/api/v1/accounts/9/cache_keys");
        then.status(503);
    });

    let client = client_for(&server, "account_id = 9")?;
    let err = client.get_cache_keys().await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::HttpStatus { status: 503, ref body } if body.is_empty()
    ));
    Ok(())
}
