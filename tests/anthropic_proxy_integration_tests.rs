//! Integration Tests for the Anthropic Path
//!
//! UNIT UNDER TEST: ProviderProxy with provider = "anthropic" over real HTTP
//!
//! BUSINESS RESPONSIBILITY:
//!   - POST to /v1/messages with `x-api-key` and `anthropic-version` headers
//!   - Send the system instruction as a top-level field, or not at all
//!   - Return the first content block's text
//!   - Surface Anthropic errors with Anthropic's status code
//!
//! TEST COVERAGE:
//!   - Wire format of the outbound request
//!   - Success, empty content, and error responses

use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::{assert_content, assert_error, create_test_proxy, test_body};

fn create_success_response() -> serde_json::Value {
    serde_json::json!({
        "id": "msg_123",
        "type": "message",
        "role": "assistant",
        "content": [{"type": "text", "text": "Hello!"}],
        "model": "claude-sonnet-4-20250514",
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 10, "output_tokens": 5}
    })
}

#[tokio::test]
async fn test_anthropic_request_wire_format() {
    // Arrange
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(serde_json::json!({
            "model": "claude-sonnet-4-20250514",
            "max_tokens": 4096,
            "system": "You are terse.",
            "messages": [{"role": "user", "content": "Hi"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_success_response()))
        .expect(1)
        .mount(&mock_server)
        .await;
    let proxy = create_test_proxy(&mock_server.uri());

    // Act
    let reply = proxy
        .handle(&test_body("anthropic", Some("You are terse.")))
        .await;

    // Assert
    assert_content(&reply, "Hello!");
}

#[tokio::test]
async fn test_anthropic_without_system_sends_no_system_field() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(create_success_response()))
        .expect(1)
        .mount(&mock_server)
        .await;
    let proxy = create_test_proxy(&mock_server.uri());

    let reply = proxy.handle(&test_body("anthropic", None)).await;

    assert_content(&reply, "Hello!");
    let requests = mock_server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(sent.get("system").is_none(), "unexpected system field: {sent}");
    assert_eq!(sent["messages"].as_array().unwrap().len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_anthropic_empty_content_returns_empty_string() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"content": []})),
        )
        .mount(&mock_server)
        .await;
    let proxy = create_test_proxy(&mock_server.uri());

    let reply = proxy.handle(&test_body("anthropic", None)).await;

    assert_content(&reply, "");
}

#[tokio::test]
async fn test_anthropic_authentication_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "type": "error",
            "error": {"type": "authentication_error", "message": "invalid x-api-key"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    let proxy = create_test_proxy(&mock_server.uri());

    let reply = proxy.handle(&test_body("anthropic", None)).await;

    assert_error(&reply, 401, "invalid x-api-key");
}

#[tokio::test]
async fn test_anthropic_overloaded_error_falls_back_to_type() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(529).set_body_json(serde_json::json!({
            "type": "error",
            "error": {"type": "overloaded_error"}
        })))
        .mount(&mock_server)
        .await;
    let proxy = create_test_proxy(&mock_server.uri());

    let reply = proxy.handle(&test_body("anthropic", None)).await;

    assert_error(&reply, 529, "overloaded_error");
}

#[tokio::test]
async fn test_anthropic_error_is_not_retried() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": {"message": "internal"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    let proxy = create_test_proxy(&mock_server.uri());

    let reply = proxy.handle(&test_body("anthropic", None)).await;

    assert_error(&reply, 500, "internal");
}
