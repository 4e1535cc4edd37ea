//! Anthropic Messages API request and response type definitions

use serde::{Deserialize, Serialize};

/// Messages API request structure
#[derive(Debug, Serialize, Clone)]
pub(super) struct AnthropicRequest {
    pub model: String,
    pub max_tokens: u32,
    /// Omitted entirely when the test has no system instruction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    pub messages: Vec<AnthropicMessage>,
}

/// Anthropic message structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub(super) struct AnthropicMessage {
    pub role: String,
    pub content: String,
}

/// Messages API response structure, reduced to what the proxy reads
#[derive(Debug, Deserialize, Clone)]
pub(super) struct AnthropicResponse {
    #[serde(default)]
    pub content: Option<Vec<AnthropicContentBlock>>,
}

/// Anthropic content block; only text blocks carry `text`
#[derive(Debug, Deserialize, Clone)]
pub(super) struct AnthropicContentBlock {
    #[serde(default)]
    pub text: Option<String>,
}
