//! The provider proxy
//!
//! [`ProviderProxy::handle`] is the single entry point: it parses and
//! validates an inbound body, dispatches to the selected provider's adapter,
//! makes exactly one outbound call, and normalizes whatever comes back into a
//! [`ProxyReply`]. Every failure is converted here; nothing escapes as a panic
//! or an unhandled error.
//!
//! # Example
//!
//! ```rust,no_run
//! use prompt_proxy::{ProviderProxy, ProxyConfig};
//!
//! # async fn example() -> prompt_proxy::ProxyResult<()> {
//! let proxy = ProviderProxy::from_config(&ProxyConfig::default())?;
//! let reply = proxy
//!     .handle(br#"{"provider":"openai","apiKey":"sk-...","model":"gpt-4o","message":"Hi"}"#)
//!     .await;
//! println!("{} {:?}", reply.status, reply.body);
//! # Ok(())
//! # }
//! ```

use crate::config::ProxyConfig;
use crate::error::{ErrorSeverity, ProxyError, ProxyResult};
use crate::logging::{log_debug, log_error, log_info, log_warn};
use crate::providers::{AnthropicAdapter, GoogleAdapter, OpenAIAdapter, ProviderAdapter};
use crate::types::{Provider, ProxyReply, TestRequest};
use crate::upstream::{HttpUpstream, Upstream, UpstreamReply};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

/// Inbound body before validation. Every field is optional so that absence
/// is reported as missing fields rather than as malformed JSON.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTestRequest {
    provider: Option<String>,
    api_key: Option<String>,
    model: Option<String>,
    system: Option<String>,
    message: Option<String>,
}

impl RawTestRequest {
    fn into_test_request(self) -> ProxyResult<TestRequest> {
        let required = |field: Option<String>| field.filter(|value| !value.is_empty());

        let (Some(provider), Some(api_key), Some(model), Some(message)) = (
            required(self.provider),
            required(self.api_key),
            required(self.model),
            required(self.message),
        ) else {
            return Err(ProxyError::missing_fields());
        };

        let provider: Provider = provider.parse()?;
        let request = TestRequest::new(provider, api_key, model, message);
        Ok(match self.system {
            Some(system) => request.with_system(system),
            None => request,
        })
    }
}

/// Stateless proxy over the three provider adapters.
///
/// Cloning is cheap; clones share the transport.
#[derive(Clone)]
pub struct ProviderProxy {
    anthropic: AnthropicAdapter,
    openai: OpenAIAdapter,
    google: GoogleAdapter,
    upstream: Arc<dyn Upstream>,
}

impl ProviderProxy {
    /// Create a proxy with an explicit transport.
    pub fn new(config: &ProxyConfig, upstream: Arc<dyn Upstream>) -> Self {
        Self {
            anthropic: AnthropicAdapter::new(config.anthropic.clone()),
            openai: OpenAIAdapter::new(config.openai.clone()),
            google: GoogleAdapter::new(config.google.clone()),
            upstream,
        }
    }

    /// Create a proxy that talks HTTP, bounded by the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Configuration`] if the configuration is invalid
    /// or the HTTP client cannot be built.
    pub fn from_config(config: &ProxyConfig) -> ProxyResult<Self> {
        config.validate()?;
        let upstream = HttpUpstream::new(config.request_timeout)?;

        log_debug!(
            request_timeout_secs = config.request_timeout.as_secs(),
            "Provider proxy initialized"
        );

        Ok(Self::new(config, Arc::new(upstream)))
    }

    /// Adapter for a provider
    pub fn adapter(&self, provider: Provider) -> &dyn ProviderAdapter {
        match provider {
            Provider::Anthropic => &self.anthropic,
            Provider::OpenAI => &self.openai,
            Provider::Google => &self.google,
        }
    }

    /// Handle one raw inbound body and produce the normalized reply.
    pub async fn handle(&self, body: &[u8]) -> ProxyReply {
        let span = tracing::info_span!(
            "prompt_test",
            request_id = %Uuid::new_v4(),
            provider = tracing::field::Empty,
            model = tracing::field::Empty,
        );

        async move {
            let outcome = match Self::parse(body) {
                Ok(request) => {
                    let span = tracing::Span::current();
                    span.record("provider", request.provider.as_str());
                    span.record("model", request.model.as_str());
                    self.execute(&request).await
                }
                Err(e) => Err(e),
            };

            match outcome {
                Ok(content) => {
                    log_info!(content_len = content.len(), "Prompt test succeeded");
                    ProxyReply::success(content)
                }
                Err(error) => {
                    Self::log_failure(&error);
                    ProxyReply::failure(&error)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Parse and validate an inbound body.
    ///
    /// # Errors
    ///
    /// [`ProxyError::InvalidJson`], then [`ProxyError::MissingFields`], then
    /// [`ProxyError::UnknownProvider`], in that order of precedence.
    pub fn parse(body: &[u8]) -> ProxyResult<TestRequest> {
        let raw: RawTestRequest = serde_json::from_slice(body).map_err(ProxyError::invalid_json)?;
        raw.into_test_request()
    }

    /// Run a validated request: one outbound call, then normalization.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Upstream`] carrying the provider's status when
    /// the provider rejects the call, and transport or parsing errors otherwise.
    pub async fn execute(&self, request: &TestRequest) -> ProxyResult<String> {
        request.validate()?;
        let adapter = self.adapter(request.provider);
        let upstream_request = adapter.translate_request(request)?;
        let reply = self.upstream.send(upstream_request).await?;
        Self::normalize(adapter, reply)
    }

    /// The body must be JSON whatever the status; an unreadable body is a
    /// local failure, not a provider error.
    fn normalize(adapter: &dyn ProviderAdapter, reply: UpstreamReply) -> ProxyResult<String> {
        let body: Value = serde_json::from_str(&reply.body).map_err(|e| {
            ProxyError::response_parsing(format!(
                "{} returned a non-JSON body (status {}): {e}",
                adapter.provider().label(),
                reply.status.as_u16()
            ))
        })?;

        if reply.status.is_success() {
            adapter.extract_success(&body)
        } else {
            Err(ProxyError::upstream(reply.status, adapter.extract_error(&body)))
        }
    }

    fn log_failure(error: &ProxyError) {
        let status = error.status_code().as_u16();
        let category = error.category();
        match error.severity() {
            ErrorSeverity::Error => {
                log_error!(status, category = ?category, error = %error, "Prompt test failed")
            }
            ErrorSeverity::Warning => {
                log_warn!(status, category = ?category, error = %error, "Prompt test failed")
            }
            ErrorSeverity::Info => {
                log_info!(status, category = ?category, error = %error, "Prompt test rejected")
            }
        }
    }
}
