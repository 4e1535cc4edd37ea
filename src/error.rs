//! Error types for proxy operations.
//!
//! Every failure the proxy can hit is a [`ProxyError`]. Each variant knows
//! its category, its severity, and the HTTP status it is reported with, so
//! the single entry point in [`crate::proxy`] can turn any of them into the
//! normalized `{ "error": ... }` reply.
//!
//! # Error Taxonomy
//!
//! | Variant | Category | Status |
//! |---------|----------|--------|
//! | `InvalidJson` | Client | 400 |
//! | `MissingFields` | Client | 400 |
//! | `UnknownProvider` | Client | 400 |
//! | `InvalidApiKey` | Client | 400 |
//! | `Upstream` | External | upstream status |
//! | `RequestFailed` | External | 500 |
//! | `ResponseParsing` | External | 500 |
//! | `Timeout` | Transient | 500 |
//! | `Configuration` | Internal | 500 |
//!
//! # Example
//!
//! ```rust
//! use prompt_proxy::{ProxyError, ProxyResult};
//!
//! fn require_message(message: &str) -> ProxyResult<&str> {
//!     if message.is_empty() {
//!         return Err(ProxyError::missing_fields());
//!     }
//!     Ok(message)
//! }
//!
//! let err = require_message("").unwrap_err();
//! assert_eq!(err.status_code().as_u16(), 400);
//! assert_eq!(err.to_string(), "Missing required fields");
//! ```

use crate::logging::{log_debug, log_error, log_warn};
use reqwest::StatusCode;
use thiserror::Error;

/// High-level categorization of errors for routing and logging decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller sent something the proxy refuses to forward.
    Client,

    /// The provider, or the network path to it, failed.
    External,

    /// Temporary failures; the caller may simply try again.
    Transient,

    /// The proxy itself is misconfigured.
    Internal,
}

/// Severity level for logging decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Action failed and needs attention.
    Error,

    /// Unexpected but recoverable.
    Warning,

    /// Expected failure (validation, provider-side rejection).
    Info,
}

/// Convenient result type for proxy operations.
pub type ProxyResult<T> = std::result::Result<T, ProxyError>;

/// Errors that can occur while proxying a prompt test.
///
/// The `Display` text of each variant is exactly the string returned to the
/// caller in the `error` field. None of them ever carries the API key.
///
/// Use the constructor methods, which log at the appropriate level:
///
/// ```rust
/// use prompt_proxy::ProxyError;
///
/// let err = ProxyError::unknown_provider("cohere");
/// assert_eq!(err.to_string(), "Unknown provider: cohere");
/// ```
#[derive(Error, Debug)]
pub enum ProxyError {
    /// The inbound body could not be parsed into the expected structure.
    #[error("Invalid JSON body")]
    InvalidJson,

    /// One of provider, apiKey, model, message is absent or empty.
    #[error("Missing required fields")]
    MissingFields,

    /// The provider literal is not one of the supported providers.
    #[error("Unknown provider: {provider}")]
    UnknownProvider {
        /// The literal the caller sent.
        provider: String,
    },

    /// The API key contains bytes that cannot be sent in an HTTP header.
    #[error("Invalid API key format")]
    InvalidApiKey,

    /// The provider answered with a non-success status.
    #[error("{message}")]
    Upstream {
        /// Status returned by the provider, propagated unchanged.
        status: StatusCode,
        /// Human-readable message extracted from the provider's error body.
        message: String,
    },

    /// The outbound call could not be completed.
    #[error("{message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying transport error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The provider reported success but its body was unusable.
    #[error("Invalid provider response: {message}")]
    ResponseParsing {
        /// Details about the parsing failure.
        message: String,
    },

    /// The outbound call exceeded the configured execution ceiling.
    #[error("Request timed out after {timeout_seconds}s")]
    Timeout {
        /// The timeout that was exceeded.
        timeout_seconds: u64,
    },

    /// The proxy configuration is invalid or incomplete.
    #[error("Proxy configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },
}

impl ProxyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidJson
            | Self::MissingFields
            | Self::UnknownProvider { .. }
            | Self::InvalidApiKey => ErrorCategory::Client,
            Self::Upstream { .. } | Self::RequestFailed { .. } | Self::ResponseParsing { .. } => {
                ErrorCategory::External
            }
            Self::Timeout { .. } => ErrorCategory::Transient,
            Self::Configuration { .. } => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidJson
            | Self::MissingFields
            | Self::UnknownProvider { .. }
            | Self::InvalidApiKey
            | Self::Upstream { .. } => ErrorSeverity::Info,
            Self::ResponseParsing { .. } | Self::Timeout { .. } => ErrorSeverity::Warning,
            Self::RequestFailed { .. } | Self::Configuration { .. } => ErrorSeverity::Error,
        }
    }

    /// HTTP status the error is reported with.
    ///
    /// Client errors are 400, provider errors keep the provider's status, and
    /// everything else is 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Upstream { status, .. } => *status,
            _ => match self.category() {
                ErrorCategory::Client => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// The string placed in the `error` field of the reply.
    pub fn reply_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            message
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    pub fn invalid_json(reason: impl std::fmt::Display) -> Self {
        log_debug!(
            error_type = "invalid_json",
            reason = %reason,
            "Inbound body is not a valid test request"
        );
        Self::InvalidJson
    }

    pub fn missing_fields() -> Self {
        log_debug!(
            error_type = "missing_fields",
            "Inbound test request is missing required fields"
        );
        Self::MissingFields
    }

    pub fn unknown_provider(provider: impl Into<String>) -> Self {
        let provider = provider.into();
        log_debug!(
            error_type = "unknown_provider",
            provider = %provider,
            "Unknown provider requested"
        );
        Self::UnknownProvider { provider }
    }

    pub fn invalid_api_key() -> Self {
        log_debug!(
            error_type = "invalid_api_key",
            "API key cannot be encoded as a header value"
        );
        Self::InvalidApiKey
    }

    pub fn upstream(status: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "upstream",
            status = %status,
            message = %message,
            "Provider returned an error response"
        );
        Self::Upstream { status, message }
    }

    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "Outbound provider request failed"
        );
        Self::RequestFailed { message, source }
    }

    pub fn response_parsing(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "response_parsing",
            message = %message,
            "Provider response format invalid"
        );
        Self::ResponseParsing { message }
    }

    pub fn timeout(timeout_seconds: u64) -> Self {
        log_warn!(
            error_type = "timeout",
            timeout_seconds = timeout_seconds,
            "Provider request timed out"
        );
        Self::Timeout { timeout_seconds }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration",
            message = %message,
            "Proxy configuration validation failed"
        );
        Self::Configuration { message }
    }
}
