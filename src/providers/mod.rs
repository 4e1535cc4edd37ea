//! Provider adapters
//!
//! Each supported provider has an adapter that translates a [`TestRequest`]
//! into that provider's wire format and maps the provider's JSON reply back
//! into plain text or a human-readable error message:
//!
//! - **anthropic**: Messages API, key in `x-api-key`, top-level `system`
//! - **openai**: Chat Completions API, Bearer key, leading `system` message
//! - **google**: `generateContent`, key in the query string, `systemInstruction`
//!
//! Adapters are pure: they never perform I/O and hold no mutable state. The
//! single outbound call is made by [`crate::upstream::Upstream`].

pub mod anthropic;
pub mod google;
pub mod openai;

#[cfg(test)]
mod tests;

pub use anthropic::AnthropicAdapter;
pub use google::GoogleAdapter;
pub use openai::OpenAIAdapter;

use crate::error::{ProxyError, ProxyResult};
use crate::types::{Provider, TestRequest};
use reqwest::header::HeaderMap;
use reqwest::Url;
use serde_json::Value;
use std::fmt;

/// Common capability of every provider adapter.
pub trait ProviderAdapter: Send + Sync + fmt::Debug {
    /// The provider this adapter speaks to
    fn provider(&self) -> Provider;

    /// Build the outbound HTTP request for a validated test request.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::InvalidApiKey`] if the key cannot be sent in a
    /// header, or [`ProxyError::Configuration`] if the endpoint cannot be built.
    fn translate_request(&self, request: &TestRequest) -> ProxyResult<UpstreamRequest>;

    /// Extract the generated text from a successful response body.
    ///
    /// Missing text yields an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::ResponseParsing`] if the body does not have the
    /// provider's response shape.
    fn extract_success(&self, body: &Value) -> ProxyResult<String>;

    /// Extract a human-readable message from an error response body.
    fn extract_error(&self, body: &Value) -> String;
}

/// A fully built outbound request: always a JSON `POST`.
#[derive(Clone)]
pub struct UpstreamRequest {
    pub provider: Provider,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Value,
}

impl fmt::Debug for UpstreamRequest {
    // The key may sit in a header or in the query string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamRequest")
            .field("provider", &self.provider)
            .field("endpoint", &redacted_endpoint(&self.url))
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// Origin and path of a URL, without query string or credentials.
pub fn redacted_endpoint(url: &Url) -> String {
    format!("{}{}", url.origin().ascii_serialization(), url.path())
}

/// Append path segments to a base URL, percent-encoding each segment.
pub(crate) fn endpoint(base_url: &str, segments: &[&str]) -> ProxyResult<Url> {
    let mut url = Url::parse(base_url)
        .map_err(|e| ProxyError::configuration(format!("Invalid base URL {base_url}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| ProxyError::configuration(format!("Base URL cannot be a base: {base_url}")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Deserialize a provider response shape from an already parsed body.
pub(crate) fn parse_shape<'a, T>(provider: Provider, body: &'a Value) -> ProxyResult<T>
where
    T: serde::Deserialize<'a>,
{
    T::deserialize(body).map_err(|e| {
        ProxyError::response_parsing(format!("unexpected {} response shape: {e}", provider.label()))
    })
}

/// A string field that is present and non-empty.
pub(crate) fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

/// `error.message`, then `error.<fallback_field>`, of an `{"error": {...}}` body.
pub(crate) fn nested_error_message(body: &Value, fallback_field: &str) -> Option<String> {
    let error = body.get("error")?;
    non_empty_str(error.get("message"))
        .or_else(|| non_empty_str(error.get(fallback_field)))
        .map(str::to_string)
}
