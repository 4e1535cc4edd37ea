//! Test helper utilities for prompt-proxy integration tests
//!
//! Builds proxies and routers whose provider base URLs point at a wiremock
//! server, plus small helpers for inbound bodies.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use prompt_proxy::server::{self, AppState};
use prompt_proxy::{ProviderProxy, ProxyConfig, ProxyReply};
use std::time::Duration;

/// Configuration with every provider pointed at `base_url`
pub fn create_test_config(base_url: &str) -> ProxyConfig {
    let mut config = ProxyConfig {
        request_timeout: Duration::from_secs(5),
        ..ProxyConfig::default()
    };
    config.anthropic.base_url = base_url.to_string();
    config.openai.base_url = base_url.to_string();
    config.google.base_url = base_url.to_string();
    config
}

/// Real HTTP proxy pointed at the mock server
pub fn create_test_proxy(base_url: &str) -> ProviderProxy {
    ProviderProxy::from_config(&create_test_config(base_url))
        .expect("Failed to create test proxy")
}

/// Router with the real HTTP proxy pointed at the mock server
pub fn create_test_router(base_url: &str) -> axum::Router {
    let config = create_test_config(base_url);
    let proxy = ProviderProxy::from_config(&config).expect("Failed to create test proxy");
    server::router(AppState::new(&config, proxy))
}

/// Inbound `/api/test` body
pub fn test_body(provider: &str, system: Option<&str>) -> Vec<u8> {
    let mut body = serde_json::json!({
        "provider": provider,
        "apiKey": "test-key",
        "model": model_for(provider),
        "message": "Hi"
    });
    if let Some(system) = system {
        body["system"] = serde_json::json!(system);
    }
    serde_json::to_vec(&body).expect("serializable test body")
}

/// A model id that the default catalog advertises for the provider
pub fn model_for(provider: &str) -> &'static str {
    match provider {
        "anthropic" => "claude-sonnet-4-20250514",
        "openai" => "gpt-4o",
        "google" => "gemini-2.0-flash",
        _ => "model-x",
    }
}

pub fn assert_content(reply: &ProxyReply, expected: &str) {
    assert_eq!(reply.status.as_u16(), 200, "unexpected reply: {reply:?}");
    assert_eq!(reply.body.content.as_deref(), Some(expected));
    assert!(reply.body.error.is_none());
}

pub fn assert_error(reply: &ProxyReply, status: u16, expected: &str) {
    assert_eq!(reply.status.as_u16(), status, "unexpected reply: {reply:?}");
    assert_eq!(reply.body.error.as_deref(), Some(expected));
    assert!(reply.body.content.is_none());
}
