//! Business services containing the credential lifecycle logic.

pub mod auth;
pub mod hasher;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use hasher::SecretHasher;
pub use session::SessionGuard;
pub use token::{TokenService, TokenServiceConfig};
