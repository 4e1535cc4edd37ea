//! generateContent request and response structures

use serde::{Deserialize, Serialize};

/// generateContent request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GoogleRequest {
    pub contents: Vec<GoogleContent>,
    pub generation_config: GoogleGenerationConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GoogleContent>,
}

/// A role-tagged list of parts. `role` is absent on system instructions.
#[derive(Debug, Clone, Serialize)]
pub(super) struct GoogleContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<GooglePart>,
}

impl GoogleContent {
    pub fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![GooglePart {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(super) struct GooglePart {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GoogleGenerationConfig {
    pub max_output_tokens: u32,
}

/// generateContent response, reduced to what the proxy reads
#[derive(Debug, Clone, Deserialize)]
pub(super) struct GoogleResponse {
    #[serde(default)]
    pub candidates: Option<Vec<GoogleCandidate>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct GoogleCandidate {
    #[serde(default)]
    pub content: Option<GoogleResponseContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct GoogleResponseContent {
    #[serde(default)]
    pub parts: Option<Vec<GoogleResponsePart>>,
}

/// Non-text parts (inline data, function calls) carry no `text`
#[derive(Debug, Clone, Deserialize)]
pub(super) struct GoogleResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}
