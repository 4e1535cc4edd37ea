//! Request and response types shared by every provider.
//!
//! These are request-scoped values: a [`TestRequest`] is built from one
//! inbound call, consumed once by the proxy, and dropped.

use crate::error::ProxyError;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of supported LLM providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Anthropic,
    OpenAI,
    Google,
}

impl Provider {
    /// All providers, in display order.
    pub const ALL: [Provider; 3] = [Provider::Anthropic, Provider::OpenAI, Provider::Google];

    /// Wire identifier used in requests (`"anthropic"`, `"openai"`, `"google"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anthropic => "anthropic",
            Self::OpenAI => "openai",
            Self::Google => "google",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Anthropic => "Anthropic",
            Self::OpenAI => "OpenAI",
            Self::Google => "Google",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = ProxyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "anthropic" => Ok(Self::Anthropic),
            "openai" => Ok(Self::OpenAI),
            "google" => Ok(Self::Google),
            other => Err(ProxyError::unknown_provider(other)),
        }
    }
}

/// A validated prompt test: which provider to call, with which key and
/// model, and what to send.
#[derive(Clone, PartialEq, Eq)]
pub struct TestRequest {
    pub provider: Provider,
    /// Caller's provider key. Forwarded to the provider only.
    pub api_key: String,
    pub model: String,
    /// Optional system instruction; `None` means the provider gets no system field at all.
    pub system: Option<String>,
    pub message: String,
}

impl TestRequest {
    pub fn new(
        provider: Provider,
        api_key: impl Into<String>,
        model: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
            model: model.into(),
            system: None,
            message: message.into(),
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        let system = system.into();
        self.system = (!system.is_empty()).then_some(system);
        self
    }

    /// Key, model, and message must all be non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::MissingFields`] otherwise.
    pub fn validate(&self) -> Result<(), ProxyError> {
        if self.api_key.is_empty() || self.model.is_empty() || self.message.is_empty() {
            return Err(ProxyError::missing_fields());
        }
        Ok(())
    }
}

impl fmt::Debug for TestRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestRequest")
            .field("provider", &self.provider)
            .field("api_key", &"[redacted]")
            .field("model", &self.model)
            .field("has_system", &self.system.is_some())
            .field("message_len", &self.message.len())
            .finish()
    }
}

/// Normalized reply body: `{"content": ...}` on success, `{"error": ...}` on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TestResponse {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            error: None,
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            content: None,
            error: Some(error.into()),
        }
    }
}

/// A normalized reply together with the HTTP status it is served with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyReply {
    pub status: StatusCode,
    pub body: TestResponse,
}

impl ProxyReply {
    pub fn success(content: String) -> Self {
        Self {
            status: StatusCode::OK,
            body: TestResponse::content(content),
        }
    }

    pub fn failure(error: &ProxyError) -> Self {
        Self {
            status: error.status_code(),
            body: TestResponse::error(error.reply_message()),
        }
    }
}

/// One selectable model for a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOption {
    pub id: String,
    pub label: String,
}

impl ModelOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}
