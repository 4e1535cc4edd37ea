//! OpenAI adapter implementation

use super::types::{OpenAIMessage, OpenAIRequest, OpenAIResponse};
use crate::config::OpenAIConfig;
use crate::error::{ProxyError, ProxyResult};
use crate::logging::log_debug;
use crate::providers::{
    endpoint, nested_error_message, parse_shape, ProviderAdapter, UpstreamRequest,
};
use crate::types::{Provider, TestRequest};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

/// OpenAI Chat Completions adapter
#[derive(Debug, Clone)]
pub struct OpenAIAdapter {
    config: OpenAIConfig,
}

impl OpenAIAdapter {
    pub fn new(config: OpenAIConfig) -> Self {
        Self { config }
    }

    /// Build Bearer authentication headers
    pub(crate) fn build_auth_headers(api_key: &str) -> ProxyResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut bearer = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| ProxyError::invalid_api_key())?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);
        Ok(headers)
    }

    fn build_messages(request: &TestRequest) -> Vec<OpenAIMessage> {
        let system = request.system.as_ref().map(|system| OpenAIMessage {
            role: "system".to_string(),
            content: system.clone(),
        });
        let user = OpenAIMessage {
            role: "user".to_string(),
            content: request.message.clone(),
        };
        system.into_iter().chain(std::iter::once(user)).collect()
    }
}

impl ProviderAdapter for OpenAIAdapter {
    fn provider(&self) -> Provider {
        Provider::OpenAI
    }

    fn translate_request(&self, request: &TestRequest) -> ProxyResult<UpstreamRequest> {
        let url = endpoint(&self.config.base_url, &["v1", "chat", "completions"])?;
        let headers = Self::build_auth_headers(&request.api_key)?;
        let body = OpenAIRequest {
            model: request.model.clone(),
            max_tokens: self.config.max_output_tokens,
            messages: Self::build_messages(request),
        };
        let body = serde_json::to_value(body).map_err(|e| {
            ProxyError::configuration(format!("Failed to encode OpenAI request: {e}"))
        })?;

        log_debug!(
            provider = "openai",
            model = %request.model,
            has_system = request.system.is_some(),
            max_tokens = self.config.max_output_tokens,
            "Translated OpenAI request"
        );

        Ok(UpstreamRequest {
            provider: Provider::OpenAI,
            url,
            headers,
            body,
        })
    }

    fn extract_success(&self, body: &Value) -> ProxyResult<String> {
        let response: OpenAIResponse = parse_shape(Provider::OpenAI, body)?;
        Ok(response
            .choices
            .and_then(|choices| choices.into_iter().next())
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default())
    }

    fn extract_error(&self, body: &Value) -> String {
        nested_error_message(body, "type").unwrap_or_else(|| body.to_string())
    }
}
