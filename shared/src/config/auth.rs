//! Authentication configuration

use serde::{Deserialize, Serialize};

/// Token signing and lifetime configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    /// Secret key for signing access tokens
    pub secret: String,

    /// Signing algorithm identifier (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Access token expiry time in minutes
    pub access_token_expire_minutes: i64,

    /// Refresh token expiry time in minutes
    pub refresh_token_expire_minutes: i64,

    /// Issuer claim embedded in access tokens
    #[serde(default = "default_issuer")]
    pub issuer: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-please-change-in-production"),
            algorithm: default_algorithm(),
            access_token_expire_minutes: 15,
            refresh_token_expire_minutes: 7 * 24 * 60,
            issuer: default_issuer(),
        }
    }
}

impl TokenConfig {
    /// Create a new token configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expire_minutes = minutes;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expire_minutes = days * 24 * 60;
        self
    }

    /// Check if the default secret is still in use (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "development-secret-please-change-in-production"
    }
}

/// One-time credential configuration (verification codes and reset tokens)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CredentialConfig {
    /// Verification code expiry time in minutes
    pub verification_code_expire_minutes: i64,

    /// Reset token expiry time in minutes
    pub reset_token_expire_minutes: i64,

    /// Number of random bytes in a reset token secret
    #[serde(default = "default_reset_token_bytes")]
    pub reset_token_bytes: usize,

    /// Bcrypt cost factor for password and code hashing
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            verification_code_expire_minutes: 10,
            reset_token_expire_minutes: 30,
            reset_token_bytes: default_reset_token_bytes(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Token signing configuration
    pub token: TokenConfig,

    /// One-time credential configuration
    #[serde(default)]
    pub credential: CredentialConfig,
}

impl AuthConfig {
    /// Create from environment variables
    ///
    /// Entry point for the composition root: called once at process
    /// start, then handed by reference to the service constructors.
    /// Unset or malformed variables fall back to their defaults.
    pub fn from_env() -> Self {
        let secret = std::env::var("SECRET_KEY")
            .unwrap_or_else(|_| TokenConfig::default().secret);
        let algorithm = std::env::var("ALGORITHM").unwrap_or_else(|_| default_algorithm());

        Self {
            token: TokenConfig {
                secret,
                algorithm,
                access_token_expire_minutes: env_i64("ACCESS_TOKEN_EXPIRE_MINUTES", 15),
                refresh_token_expire_minutes: env_i64(
                    "REFRESH_TOKEN_EXPIRE_MINUTES",
                    7 * 24 * 60,
                ),
                issuer: default_issuer(),
            },
            credential: CredentialConfig {
                verification_code_expire_minutes: env_i64(
                    "EMAIL_VERIFICATION_CODE_EXPIRE_MINUTES",
                    10,
                ),
                reset_token_expire_minutes: env_i64("RESET_TOKEN_EXPIRE_MINUTES", 30),
                reset_token_bytes: env_i64("RESET_TOKEN_BYTES", 32) as usize,
                bcrypt_cost: env_i64("BCRYPT_COST", 12) as u32,
            },
        }
    }
}

fn env_i64(key: &str, default: i64) -> i64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn default_algorithm() -> String {
    String::from("HS256")
}

fn default_issuer() -> String {
    String::from("keygate")
}

fn default_reset_token_bytes() -> usize {
    32
}

fn default_bcrypt_cost() -> u32 {
    12
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_config_default() {
        let config = TokenConfig::default();
        assert_eq!(config.access_token_expire_minutes, 15);
        assert_eq!(config.refresh_token_expire_minutes, 7 * 24 * 60);
        assert_eq!(config.algorithm, "HS256");
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_token_config_builder() {
        let config = TokenConfig::new("my-secret")
            .with_access_expiry_minutes(30)
            .with_refresh_expiry_days(14);

        assert_eq!(config.access_token_expire_minutes, 30);
        assert_eq!(config.refresh_token_expire_minutes, 14 * 24 * 60);
        assert!(!config.is_using_default_secret());
    }

    #[test]
    fn test_credential_config_default() {
        let config = CredentialConfig::default();
        assert_eq!(config.verification_code_expire_minutes, 10);
        assert_eq!(config.reset_token_expire_minutes, 30);
        assert_eq!(config.reset_token_bytes, 32);
        assert_eq!(config.bcrypt_cost, 12);
    }
}
