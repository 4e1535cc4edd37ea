//! Tests for the Google adapter
