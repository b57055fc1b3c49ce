//! Shared utilities and common types for the KeyGate backend
//!
//! This crate provides functionality used across the workspace:
//! - Configuration types built once at process start from the environment
//! - Response structures shared with the transport layer
//! - Boundary validation utilities (email format, password policy)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AuthConfig, CredentialConfig, DatabaseConfig, TokenConfig};
pub use types::{ErrorResponse, MessageResponse};
pub use utils::validation;
