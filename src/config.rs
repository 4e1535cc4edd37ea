//! Proxy configuration.
//!
//! Endpoints, token caps, and the advisory model lists are plain data keyed
//! by provider, so a deployment or a test can swap any of them. Provider API
//! keys are never part of the configuration; they arrive with each request.

use crate::error::{ProxyError, ProxyResult};
use crate::logging::log_debug;
use crate::types::{ModelOption, Provider};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Debug;
use std::net::SocketAddr;
use std::time::Duration;

/// Output token cap sent to every provider unless overridden.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 4096;

/// Execution ceiling for the single outbound call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Trait for provider-specific configuration
pub trait ProviderConfig: Send + Sync + Debug {
    /// The provider this configuration belongs to
    fn provider(&self) -> Provider;

    /// Get the base URL for API calls
    fn base_url(&self) -> &str;

    /// Output token cap placed in every outbound request
    fn max_output_tokens(&self) -> u32;

    /// Models offered to clients for this provider
    fn models(&self) -> &[ModelOption];

    /// First advertised model, if any
    fn default_model(&self) -> Option<&ModelOption> {
        self.models().first()
    }

    /// Validate provider configuration
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Configuration`] if the base URL is empty or
    /// unparseable, the token cap is zero, or no models are listed.
    fn validate(&self) -> ProxyResult<()> {
        let name = self.provider().label();
        if self.base_url().trim().is_empty() {
            return Err(ProxyError::configuration(format!(
                "{name} base URL is required"
            )));
        }
        if let Err(e) = reqwest::Url::parse(self.base_url()) {
            return Err(ProxyError::configuration(format!(
                "{name} base URL is invalid: {e}"
            )));
        }
        if self.max_output_tokens() == 0 {
            return Err(ProxyError::configuration(format!(
                "{name} max output tokens must be greater than zero"
            )));
        }
        if self.models().is_empty() {
            return Err(ProxyError::configuration(format!(
                "{name} must list at least one model"
            )));
        }
        Ok(())
    }
}

/// Anthropic-specific configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnthropicConfig {
    pub base_url: String,
    /// Value of the `anthropic-version` header
    pub api_version: String,
    pub max_output_tokens: u32,
    pub models: Vec<ModelOption>,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.anthropic.com".to_string(),
            api_version: "2023-06-01".to_string(),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            models: vec![
                ModelOption::new("claude-sonnet-4-20250514", "Claude Sonnet 4"),
                ModelOption::new("claude-haiku-4-20250414", "Claude Haiku 4"),
            ],
        }
    }
}

impl ProviderConfig for AnthropicConfig {
    fn provider(&self) -> Provider {
        Provider::Anthropic
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn max_output_tokens(&self) -> u32 {
        self.max_output_tokens
    }

    fn models(&self) -> &[ModelOption] {
        &self.models
    }
}

/// OpenAI-specific configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAIConfig {
    pub base_url: String,
    pub max_output_tokens: u32,
    pub models: Vec<ModelOption>,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            models: vec![
                ModelOption::new("gpt-4o", "GPT-4o"),
                ModelOption::new("gpt-4o-mini", "GPT-4o Mini"),
            ],
        }
    }
}

impl ProviderConfig for OpenAIConfig {
    fn provider(&self) -> Provider {
        Provider::OpenAI
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn max_output_tokens(&self) -> u32 {
        self.max_output_tokens
    }

    fn models(&self) -> &[ModelOption] {
        &self.models
    }
}

/// Google generative-language configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleConfig {
    pub base_url: String,
    /// Path segment selecting the API revision, e.g. `v1beta`
    pub api_version: String,
    pub max_output_tokens: u32,
    pub models: Vec<ModelOption>,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_version: "v1beta".to_string(),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            models: vec![
                ModelOption::new("gemini-2.0-flash", "Gemini 2.0 Flash"),
                ModelOption::new("gemini-2.5-pro-preview-05-06", "Gemini 2.5 Pro"),
            ],
        }
    }
}

impl ProviderConfig for GoogleConfig {
    fn provider(&self) -> Provider {
        Provider::Google
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn max_output_tokens(&self) -> u32 {
        self.max_output_tokens
    }

    fn models(&self) -> &[ModelOption] {
        &self.models
    }
}

/// Top-level configuration for the proxy service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,
    /// Ceiling for the single outbound provider call
    pub request_timeout: Duration,
    pub anthropic: AnthropicConfig,
    pub openai: OpenAIConfig,
    pub google: GoogleConfig,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            anthropic: AnthropicConfig::default(),
            openai: OpenAIConfig::default(),
            google: GoogleConfig::default(),
        }
    }
}

impl ProxyConfig {
    /// Build configuration from environment variables over the defaults.
    ///
    /// Recognized variables: `PROXY_BIND` (or `PORT`), `PROXY_REQUEST_TIMEOUT_SECS`,
    /// `PROXY_MAX_OUTPUT_TOKENS`, `ANTHROPIC_BASE_URL`, `ANTHROPIC_VERSION`,
    /// `OPENAI_BASE_URL`, `GOOGLE_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Configuration`] when a variable is set but
    /// malformed, or when the resulting configuration fails validation.
    pub fn from_env() -> ProxyResult<Self> {
        let mut config = Self::default();

        if let Some(bind) = env_string("PROXY_BIND") {
            config.bind_addr = parse_env("PROXY_BIND", &bind)?;
        } else if let Some(port) = env_string("PORT") {
            let port: u16 = parse_env("PORT", &port)?;
            config.bind_addr.set_port(port);
        }

        if let Some(secs) = env_string("PROXY_REQUEST_TIMEOUT_SECS") {
            config.request_timeout =
                Duration::from_secs(parse_env("PROXY_REQUEST_TIMEOUT_SECS", &secs)?);
        }

        if let Some(tokens) = env_string("PROXY_MAX_OUTPUT_TOKENS") {
            let tokens: u32 = parse_env("PROXY_MAX_OUTPUT_TOKENS", &tokens)?;
            config.anthropic.max_output_tokens = tokens;
            config.openai.max_output_tokens = tokens;
            config.google.max_output_tokens = tokens;
        }

        if let Some(url) = env_string("ANTHROPIC_BASE_URL") {
            config.anthropic.base_url = url;
        }
        if let Some(version) = env_string("ANTHROPIC_VERSION") {
            config.anthropic.api_version = version;
        }
        if let Some(url) = env_string("OPENAI_BASE_URL") {
            config.openai.base_url = url;
        }
        if let Some(url) = env_string("GOOGLE_BASE_URL") {
            config.google.base_url = url;
        }

        config.validate()?;

        log_debug!(
            bind_addr = %config.bind_addr,
            request_timeout_secs = config.request_timeout.as_secs(),
            "Proxy configuration loaded"
        );

        Ok(config)
    }

    /// Validate the whole configuration
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Configuration`] if the timeout is zero or any
    /// provider configuration is invalid.
    pub fn validate(&self) -> ProxyResult<()> {
        if self.request_timeout.is_zero() {
            return Err(ProxyError::configuration(
                "Request timeout must be greater than zero",
            ));
        }
        self.providers()
            .into_iter()
            .try_for_each(|provider| provider.validate())
    }

    /// Configuration for one provider
    pub fn provider(&self, provider: Provider) -> &dyn ProviderConfig {
        match provider {
            Provider::Anthropic => &self.anthropic,
            Provider::OpenAI => &self.openai,
            Provider::Google => &self.google,
        }
    }

    /// All provider configurations in [`Provider::ALL`] order
    pub fn providers(&self) -> [&dyn ProviderConfig; 3] {
        Provider::ALL.map(|provider| self.provider(provider))
    }

    /// The advertised providers and their models, as served to clients
    pub fn model_catalog(&self) -> Vec<ProviderModels> {
        self.providers()
            .into_iter()
            .map(|config| ProviderModels {
                id: config.provider(),
                label: config.provider().label().to_string(),
                default_model: config.default_model().map(|model| model.id.clone()),
                models: config.models().to_vec(),
            })
            .collect()
    }
}

/// One provider's entry in the model catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderModels {
    pub id: Provider,
    pub label: String,
    pub default_model: Option<String>,
    pub models: Vec<ModelOption>,
}

fn env_string(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

fn parse_env<T>(name: &str, raw: &str) -> ProxyResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|e| ProxyError::configuration(format!("{name} is invalid ({raw}): {e}")))
}
