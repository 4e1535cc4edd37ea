//! Anthropic Claude adapter
//!
//! Speaks Anthropic's native Messages API.
//!
//! ## Module Organization
//!
//! - `types`: Request/response structures for the Messages API
//! - `adapter`: Translation between [`crate::TestRequest`] and those structures

mod adapter;
mod types;

#[cfg(test)]
mod tests;

pub use adapter::AnthropicAdapter;
