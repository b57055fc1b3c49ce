//! Configuration for the credential lifecycle engine

use kg_shared::config::CredentialConfig;

/// Configuration for the credential lifecycle engine
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Verification code lifetime in minutes
    pub verification_code_ttl_minutes: i64,
    /// Reset token lifetime in minutes
    pub reset_token_ttl_minutes: i64,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            verification_code_ttl_minutes: 10,
            reset_token_ttl_minutes: 30,
        }
    }
}

impl AuthServiceConfig {
    /// Build from the shared configuration struct
    pub fn from_shared(config: &CredentialConfig) -> Self {
        Self {
            verification_code_ttl_minutes: config.verification_code_expire_minutes,
            reset_token_ttl_minutes: config.reset_token_expire_minutes,
        }
    }
}
