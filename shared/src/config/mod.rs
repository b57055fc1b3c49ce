//! Configuration module
//!
//! Configuration is constructed once at process start (typically via
//! `from_env`) and passed by reference into the services that need it.
//! There is no ambient global configuration state.

pub mod auth;
pub mod database;

pub use auth::{AuthConfig, CredentialConfig, TokenConfig};
pub use database::DatabaseConfig;
