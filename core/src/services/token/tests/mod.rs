//! Tests for the token service.

mod service_tests;
