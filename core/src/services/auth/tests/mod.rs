//! Tests for the credential lifecycle engine.
