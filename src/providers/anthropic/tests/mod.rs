//! Tests for the Anthropic adapter
//!
//! These are pure translation tests. HTTP round trips against a mock server
//! live in `tests/anthropic_proxy_integration_tests.rs`.
