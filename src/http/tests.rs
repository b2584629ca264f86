//! Tests for the HTTP transport module

use super::*;
use crate::error::Error;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_browse_client_config_default() {
    let config = BrowseClientConfig::default();
    assert_eq!(config.base_url, "https://www.youtube.com");
    assert_eq!(config.client_name, "WEB");
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.default_headers.is_empty());
}

#[test]
fn test_browse_client_config_builder() {
    let config = BrowseClientConfig::builder()
        .base_url("https://proxy.example.com")
        .api_key("test-key")
        .client_identity("WEB_EMBEDDED_PLAYER", "1.2.3")
        .timeout(Duration::from_secs(5))
        .user_agent("test-agent/1.0")
        .header("X-Custom", "value")
        .build();

    assert_eq!(config.base_url, "https://proxy.example.com");
    assert_eq!(config.api_key, "test-key");
    assert_eq!(config.client_name, "WEB_EMBEDDED_PLAYER");
    assert_eq!(config.client_version, "1.2.3");
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.user_agent, "test-agent/1.0");
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
}

#[tokio::test]
async fn test_post_sends_api_key_and_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/youtubei/v1/browse"))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({ "browseId": "UC123" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = BrowseClientConfig::builder()
        .base_url(mock_server.uri())
        .api_key("test-key")
        .build();
    let client = BrowseClient::with_config(config);

    let body = client
        .post("/youtubei/v1/browse", json!({ "browseId": "UC123" }))
        .await
        .unwrap();

    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_post_injects_client_context() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "context": {
                "client": { "clientName": "WEB", "clientVersion": "9.9.9" }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = BrowseClientConfig::builder()
        .base_url(mock_server.uri())
        .client_identity("WEB", "9.9.9")
        .build();
    let client = BrowseClient::with_config(config);

    client
        .post("/youtubei/v1/browse", json!({ "browseId": "UC1" }))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_post_sends_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("X-Origin", "https://www.youtube.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let config = BrowseClientConfig::builder()
        .base_url(mock_server.uri())
        .header("X-Origin", "https://www.youtube.com")
        .build();
    let client = BrowseClient::with_config(config);

    client
        .post("/youtubei/v1/browse", json!({}))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_non_2xx_is_a_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&mock_server)
        .await;

    let config = BrowseClientConfig::builder()
        .base_url(mock_server.uri())
        .build();
    let client = BrowseClient::with_config(config);

    let err = client
        .post("/youtubei/v1/browse", json!({}))
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "Forbidden");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
    assert!(Error::http_status(403, "").is_transport());
}

#[tokio::test]
async fn test_base_url_trailing_slash_is_normalized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/youtubei/v1/browse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = BrowseClientConfig::builder()
        .base_url(format!("{}/", mock_server.uri()))
        .build();
    let client = BrowseClient::with_config(config);

    client
        .post("youtubei/v1/browse", json!({}))
        .await
        .unwrap();
}
