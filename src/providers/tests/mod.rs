//! Provider Adapter Compliance Tests
//!
//! Verifies that ALL adapters honor the shared [`ProviderAdapter`] contract
//! the same way, so one provider cannot silently diverge from the others.
//! Provider-specific behavior is tested in each provider's own `tests/`.

use super::{
    endpoint, redacted_endpoint, AnthropicAdapter, GoogleAdapter, OpenAIAdapter, ProviderAdapter,
};
use crate::config::{AnthropicConfig, GoogleConfig, OpenAIConfig};
use crate::error::ProxyError;
use crate::types::{Provider, TestRequest};
use serde_json::json;

fn all_adapters() -> Vec<Box<dyn ProviderAdapter>> {
    vec![
        Box::new(AnthropicAdapter::new(AnthropicConfig::default())),
        Box::new(OpenAIAdapter::new(OpenAIConfig::default())),
        Box::new(GoogleAdapter::new(GoogleConfig::default())),
    ]
}

#[test]
fn test_adapters_cover_every_provider_once() {
    let providers: Vec<Provider> = all_adapters().iter().map(|a| a.provider()).collect();

    assert_eq!(providers, Provider::ALL.to_vec());
}

#[test]
fn test_all_adapters_extract_nested_error_message() {
    let body = json!({"error": {"message": "invalid key"}});

    for adapter in all_adapters() {
        assert_eq!(
            adapter.extract_error(&body),
            "invalid key",
            "{} should read error.message",
            adapter.provider()
        );
    }
}

#[test]
fn test_all_adapters_return_empty_content_for_empty_object() {
    for adapter in all_adapters() {
        assert_eq!(
            adapter.extract_success(&json!({})).unwrap(),
            "",
            "{} should treat missing text as empty",
            adapter.provider()
        );
    }
}

#[test]
fn test_all_adapters_post_json_with_configured_cap() {
    for adapter in all_adapters() {
        let provider = adapter.provider();
        let request = TestRequest::new(provider, "key-123", "model-x", "Hi");

        let upstream = adapter.translate_request(&request).unwrap();

        assert_eq!(upstream.provider, provider);
        assert_eq!(
            upstream.headers.get("content-type").unwrap(),
            "application/json"
        );
        assert!(
            upstream.body.to_string().contains("4096"),
            "{provider} should send the 4096 token cap"
        );
    }
}

#[test]
fn test_translation_is_deterministic() {
    for adapter in all_adapters() {
        let request = TestRequest::new(adapter.provider(), "key-123", "model-x", "Hi")
            .with_system("Be brief.");

        let first = adapter.translate_request(&request).unwrap();
        let second = adapter.translate_request(&request).unwrap();

        assert_eq!(first.url, second.url);
        assert_eq!(first.headers, second.headers);
        assert_eq!(first.body, second.body);
    }
}

#[test]
fn test_upstream_request_debug_never_shows_key() {
    for adapter in all_adapters() {
        let request = TestRequest::new(adapter.provider(), "secret-key-123", "model-x", "Hi");

        let upstream = adapter.translate_request(&request).unwrap();
        let rendered = format!("{upstream:?}");

        assert!(
            !rendered.contains("secret-key-123"),
            "{} leaked the key: {rendered}",
            adapter.provider()
        );
    }
}

#[test]
fn test_endpoint_appends_segments_to_base_path() {
    let url = endpoint("http://localhost:8080/proxy/", &["v1", "messages"]).unwrap();

    assert_eq!(url.as_str(), "http://localhost:8080/proxy/v1/messages");
}

#[test]
fn test_endpoint_rejects_unparseable_base() {
    let result = endpoint("not a url", &["v1"]);

    assert!(matches!(result, Err(ProxyError::Configuration { .. })));
}

#[test]
fn test_redacted_endpoint_drops_query() {
    let url =
        reqwest::Url::parse("https://example.com/v1beta/models/m:generateContent?key=abc").unwrap();

    assert_eq!(
        redacted_endpoint(&url),
        "https://example.com/v1beta/models/m:generateContent"
    );
}
