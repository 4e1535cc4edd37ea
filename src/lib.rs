//! # prompt-proxy
//!
//! Prompt testing proxy that forwards one prompt to Anthropic, OpenAI, or
//! Google and normalizes the reply.
//!
//! ## Key Features
//!
//! - **One request shape**: `{provider, apiKey, model, system?, message}` for every provider
//! - **One response shape**: `{content}` on success, `{error}` on failure
//! - **Faithful status codes**: 400 for bad input, the provider's own status for
//!   provider errors, 500 otherwise
//! - **Stateless**: one outbound call per request, no retries, nothing cached, keys never logged
//!
//! ## Example
//!
//! ```rust,no_run
//! use prompt_proxy::{Provider, ProviderProxy, ProxyConfig, TestRequest};
//!
//! # async fn example() -> prompt_proxy::ProxyResult<()> {
//! let proxy = ProviderProxy::from_config(&ProxyConfig::default())?;
//! let request =
//!     TestRequest::new(Provider::Anthropic, "sk-ant-...", "claude-sonnet-4-20250514", "Hello")
//!         .with_system("You are terse.");
//! let text = proxy.execute(&request).await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

#![allow(clippy::missing_errors_doc)]

// Logging utilities (re-exports tracing with log_* naming) - internal only
pub(crate) mod logging;

pub mod config;
pub mod error;
pub mod providers;
pub mod proxy;
pub mod server;
pub mod types;
pub mod upstream;

#[cfg(test)]
pub mod tests;

pub use config::{
    AnthropicConfig, GoogleConfig, OpenAIConfig, ProviderConfig, ProviderModels, ProxyConfig,
};
pub use error::{ProxyError, ProxyResult};
pub use providers::{
    AnthropicAdapter, GoogleAdapter, OpenAIAdapter, ProviderAdapter, UpstreamRequest,
};
pub use proxy::ProviderProxy;
pub use types::{ModelOption, Provider, ProxyReply, TestRequest, TestResponse};
pub use upstream::{HttpUpstream, Upstream, UpstreamReply};
