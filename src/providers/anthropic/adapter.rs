//! Anthropic adapter implementation

use super::types::{AnthropicMessage, AnthropicRequest, AnthropicResponse};
use crate::config::AnthropicConfig;
use crate::error::{ProxyError, ProxyResult};
use crate::logging::log_debug;
use crate::providers::{
    endpoint, nested_error_message, parse_shape, ProviderAdapter, UpstreamRequest,
};
use crate::types::{Provider, TestRequest};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;

/// Anthropic Claude adapter
#[derive(Debug, Clone)]
pub struct AnthropicAdapter {
    config: AnthropicConfig,
}

impl AnthropicAdapter {
    pub fn new(config: AnthropicConfig) -> Self {
        Self { config }
    }

    /// Build headers required by the Anthropic API.
    ///
    /// The key is sent as-is in `x-api-key`, not as a Bearer token.
    pub(crate) fn build_headers(&self, api_key: &str) -> ProxyResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut key = HeaderValue::from_str(api_key).map_err(|_| ProxyError::invalid_api_key())?;
        key.set_sensitive(true);
        headers.insert("x-api-key", key);

        headers.insert(
            "anthropic-version",
            HeaderValue::from_str(&self.config.api_version).map_err(|e| {
                ProxyError::configuration(format!("Invalid Anthropic API version: {e}"))
            })?,
        );
        Ok(headers)
    }

    fn build_body(&self, request: &TestRequest) -> AnthropicRequest {
        AnthropicRequest {
            model: request.model.clone(),
            max_tokens: self.config.max_output_tokens,
            system: request.system.clone(),
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: request.message.clone(),
            }],
        }
    }
}

impl ProviderAdapter for AnthropicAdapter {
    fn provider(&self) -> Provider {
        Provider::Anthropic
    }

    fn translate_request(&self, request: &TestRequest) -> ProxyResult<UpstreamRequest> {
        let url = endpoint(&self.config.base_url, &["v1", "messages"])?;
        let headers = self.build_headers(&request.api_key)?;
        let body = serde_json::to_value(self.build_body(request)).map_err(|e| {
            ProxyError::configuration(format!("Failed to encode Anthropic request: {e}"))
        })?;

        log_debug!(
            provider = "anthropic",
            model = %request.model,
            has_system = request.system.is_some(),
            max_tokens = self.config.max_output_tokens,
            "Translated Anthropic request"
        );

        Ok(UpstreamRequest {
            provider: Provider::Anthropic,
            url,
            headers,
            body,
        })
    }

    fn extract_success(&self, body: &Value) -> ProxyResult<String> {
        let response: AnthropicResponse = parse_shape(Provider::Anthropic, body)?;
        Ok(response
            .content
            .and_then(|blocks| blocks.into_iter().next())
            .and_then(|block| block.text)
            .unwrap_or_default())
    }

    fn extract_error(&self, body: &Value) -> String {
        nested_error_message(body, "type").unwrap_or_else(|| body.to_string())
    }
}
