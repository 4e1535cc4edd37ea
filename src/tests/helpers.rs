// Test helper utilities shared by the unit test modules.
//
// IMPORTANT: These helpers are test-only and should NEVER be used in production code.

use crate::config::ProxyConfig;
use crate::proxy::ProviderProxy;
use crate::upstream::{MockUpstream, UpstreamReply};
use reqwest::StatusCode;
use std::sync::Arc;

/// Proxy over a mocked transport with default provider configuration
pub fn create_mocked_proxy(upstream: MockUpstream) -> ProviderProxy {
    ProviderProxy::new(&ProxyConfig::default(), Arc::new(upstream))
}

/// Upstream reply with a JSON body
pub fn json_reply(status: u16, body: serde_json::Value) -> UpstreamReply {
    UpstreamReply {
        status: StatusCode::from_u16(status).expect("valid status in test"),
        body: body.to_string(),
    }
}

/// Inbound body for `/api/test`
pub fn inbound_body(value: serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(&value).expect("serializable test body")
}
