//! Google Gemini adapter
//!
//! Speaks the generative-language `generateContent` API. The key travels in
//! the `key` query parameter and the system instruction in its own
//! `systemInstruction` field.

mod adapter;
mod types;

#[cfg(test)]
mod tests;

pub use adapter::GoogleAdapter;
