//! Chat Completions request and response structures

use serde::{Deserialize, Serialize};

/// OpenAI message structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct OpenAIMessage {
    pub role: String,
    pub content: String,
}

/// Chat completion request
#[derive(Debug, Clone, Serialize)]
pub(super) struct OpenAIRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<OpenAIMessage>,
}

/// Chat completion response
#[derive(Debug, Deserialize, Clone)]
pub(super) struct OpenAIResponse {
    #[serde(default)]
    pub choices: Option<Vec<OpenAIChoice>>,
}

/// Choice in OpenAI response
#[derive(Debug, Deserialize, Clone)]
pub(super) struct OpenAIChoice {
    #[serde(default)]
    pub message: Option<OpenAIResponseMessage>,
}

/// Message in OpenAI response choice; `content` is null for refusals and tool calls
#[derive(Debug, Deserialize, Clone)]
pub(super) struct OpenAIResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}
