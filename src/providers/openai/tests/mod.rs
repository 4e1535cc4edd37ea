//! Tests for the OpenAI adapter
