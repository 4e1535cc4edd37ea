//! OpenAI adapter
//!
//! Speaks the Chat Completions API. The system instruction travels as a
//! leading `system` role message.

mod adapter;
mod types;

#[cfg(test)]
mod tests;

pub use adapter::OpenAIAdapter;
