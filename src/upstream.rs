//! Outbound transport
//!
//! [`Upstream`] is the one seam where the proxy touches the network: each
//! `send` issues exactly one HTTP `POST` and returns the raw status and body.
//! No retries, no caching.

use crate::error::{ProxyError, ProxyResult};
use crate::logging::{log_debug, log_error};
use crate::providers::{redacted_endpoint, UpstreamRequest};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::{Duration, Instant};

/// Raw provider reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: String,
}

/// Issues a single outbound provider call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Send the request and return whatever the provider answered.
    ///
    /// A non-success status is NOT an error here; it is returned in the reply
    /// for the adapter to interpret.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Timeout`] when the call exceeds the configured
    /// ceiling and [`ProxyError::RequestFailed`] for any other transport failure.
    async fn send(&self, request: UpstreamRequest) -> ProxyResult<UpstreamReply>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpUpstream {
    /// Create a transport whose every call is bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Configuration`] if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> ProxyResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                ProxyError::configuration(format!("Failed to build HTTP client: {e}"))
            })?;
        Ok(Self { client, timeout })
    }

    fn map_transport_error(&self, request: &UpstreamRequest, error: reqwest::Error) -> ProxyError {
        if error.is_timeout() {
            return ProxyError::timeout(self.timeout.as_secs());
        }
        // The URL may carry the key in its query string.
        let error = error.without_url();
        log_error!(
            provider = %request.provider,
            endpoint = %redacted_endpoint(&request.url),
            error = %error,
            "HTTP request failed"
        );
        ProxyError::request_failed(
            format!("{} request failed: {error}", request.provider.label()),
            Some(Box::new(error)),
        )
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn send(&self, request: UpstreamRequest) -> ProxyResult<UpstreamReply> {
        let started = Instant::now();

        let response = self
            .client
            .post(request.url.clone())
            .headers(request.headers.clone())
            .json(&request.body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(&request, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(&request, e))?;

        log_debug!(
            provider = %request.provider,
            endpoint = %redacted_endpoint(&request.url),
            status = %status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            body_len = body.len(),
            "Provider responded"
        );

        Ok(UpstreamReply { status, body })
    }
}
