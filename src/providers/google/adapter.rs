//! Google adapter implementation

use super::types::{GoogleContent, GoogleGenerationConfig, GoogleRequest, GoogleResponse};
use crate::config::GoogleConfig;
use crate::error::{ProxyError, ProxyResult};
use crate::logging::log_debug;
use crate::providers::{
    endpoint, nested_error_message, non_empty_str, parse_shape, ProviderAdapter, UpstreamRequest,
};
use crate::types::{Provider, TestRequest};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;

/// Google Gemini adapter
#[derive(Debug, Clone)]
pub struct GoogleAdapter {
    config: GoogleConfig,
}

impl GoogleAdapter {
    pub fn new(config: GoogleConfig) -> Self {
        Self { config }
    }

    fn build_body(&self, request: &TestRequest) -> GoogleRequest {
        GoogleRequest {
            contents: vec![GoogleContent::text(Some("user"), &request.message)],
            generation_config: GoogleGenerationConfig {
                max_output_tokens: self.config.max_output_tokens,
            },
            system_instruction: request
                .system
                .as_deref()
                .map(|system| GoogleContent::text(None, system)),
        }
    }

    /// `{"error": {"message": ...}}` of the first element when the body is a list
    fn first_element_error(body: &Value) -> Option<String> {
        let first = body.as_array()?.first()?;
        non_empty_str(first.get("error").and_then(|error| error.get("message")))
            .map(str::to_string)
    }
}

impl ProviderAdapter for GoogleAdapter {
    fn provider(&self) -> Provider {
        Provider::Google
    }

    fn translate_request(&self, request: &TestRequest) -> ProxyResult<UpstreamRequest> {
        let method = format!("{}:generateContent", request.model);
        let mut url = endpoint(
            &self.config.base_url,
            &[self.config.api_version.as_str(), "models", method.as_str()],
        )?;
        // Key goes in the query string only, never in a header.
        url.query_pairs_mut().append_pair("key", &request.api_key);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let body = serde_json::to_value(self.build_body(request)).map_err(|e| {
            ProxyError::configuration(format!("Failed to encode Google request: {e}"))
        })?;

        log_debug!(
            provider = "google",
            model = %request.model,
            has_system = request.system.is_some(),
            max_output_tokens = self.config.max_output_tokens,
            "Translated Google request"
        );

        Ok(UpstreamRequest {
            provider: Provider::Google,
            url,
            headers,
            body,
        })
    }

    fn extract_success(&self, body: &Value) -> ProxyResult<String> {
        let response: GoogleResponse = parse_shape(Provider::Google, body)?;
        let parts = response
            .candidates
            .and_then(|candidates| candidates.into_iter().next())
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts)
            .unwrap_or_default();

        match parts.first().and_then(|part| part.text.as_deref()) {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Ok(parts
                .iter()
                .filter_map(|part| part.text.as_deref())
                .collect()),
        }
    }

    fn extract_error(&self, body: &Value) -> String {
        nested_error_message(body, "status")
            .or_else(|| Self::first_element_error(body))
            .unwrap_or_else(|| body.to_string())
    }
}
