//! Configuration for the token service

use jsonwebtoken::Algorithm;
use kg_shared::config::TokenConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Issuer claim embedded in access tokens
    pub issuer: String,
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
    /// Refresh token expiry in minutes
    pub refresh_token_expiry_minutes: i64,
    /// Number of random bytes in reset token secrets
    pub reset_token_bytes: usize,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            issuer: "keygate".to_string(),
            access_token_expiry_minutes: 15,
            refresh_token_expiry_minutes: 7 * 24 * 60,
            reset_token_bytes: 32,
        }
    }
}

impl TokenServiceConfig {
    /// Build from the shared configuration struct
    ///
    /// Unrecognized algorithm identifiers fall back to HS256.
    pub fn from_shared(config: &TokenConfig, reset_token_bytes: usize) -> Self {
        let algorithm = match config.algorithm.as_str() {
            "HS256" => Algorithm::HS256,
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            _ => Algorithm::HS256,
        };

        Self {
            jwt_secret: config.secret.clone(),
            algorithm,
            issuer: config.issuer.clone(),
            access_token_expiry_minutes: config.access_token_expire_minutes,
            refresh_token_expiry_minutes: config.refresh_token_expire_minutes,
            reset_token_bytes,
        }
    }
}
