//! Token entities: JWT claims, refresh token records, and the issued pair.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims structure for the access-token JWT payload
///
/// The access token carries only the user id as subject plus the standard
/// time claims; authorization data never rides in the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for an access token
    pub fn new_access_token(user_id: Uuid, issuer: &str, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(ttl_minutes);

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user id from the subject claim
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Refresh token record stored by the credential store
///
/// Only the SHA-256 digest of the opaque secret is persisted. A refresh
/// token is single-use: successful use flips `is_used` atomically with the
/// issuance of its replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Unique identifier for the record
    pub id: Uuid,

    /// User this token belongs to
    pub user_id: Uuid,

    /// SHA-256 hex digest of the opaque token secret
    pub token_hash: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Whether the token has been consumed or invalidated
    pub is_used: bool,
}

impl RefreshToken {
    /// Creates a new refresh token record with the given lifetime
    pub fn new(user_id: Uuid, token_hash: String, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            created_at: now,
            expires_at: now + Duration::minutes(ttl_minutes),
            is_used: false,
        }
    }

    /// Checks if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the token can still be exchanged
    pub fn is_active(&self) -> bool {
        !self.is_expired() && !self.is_used
    }

    /// Marks the token as consumed
    pub fn mark_used(&mut self) {
        self.is_used = true;
    }
}

/// Access/refresh token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed JWT access token
    pub access_token: String,

    /// Opaque refresh token secret (plaintext, returned once)
    pub refresh_token: String,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new_access_token(user_id, "keygate", 15);

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.iss, "keygate");
        assert!(!claims.is_expired());
        assert_eq!(claims.user_id().unwrap(), user_id);
    }

    #[test]
    fn test_claims_expiration() {
        let mut claims = Claims::new_access_token(Uuid::new_v4(), "keygate", 15);
        claims.exp = Utc::now().timestamp() - 1;
        assert!(claims.is_expired());
    }

    #[test]
    fn test_claims_jti_unique() {
        let user_id = Uuid::new_v4();
        let a = Claims::new_access_token(user_id, "keygate", 15);
        let b = Claims::new_access_token(user_id, "keygate", 15);
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn test_refresh_token_creation() {
        let user_id = Uuid::new_v4();
        let token = RefreshToken::new(user_id, "digest".to_string(), 60);

        assert_eq!(token.user_id, user_id);
        assert!(!token.is_used);
        assert!(!token.is_expired());
        assert!(token.is_active());
    }

    #[test]
    fn test_refresh_token_single_use() {
        let mut token = RefreshToken::new(Uuid::new_v4(), "digest".to_string(), 60);
        assert!(token.is_active());

        token.mark_used();

        assert!(token.is_used);
        assert!(!token.is_active());
    }

    #[test]
    fn test_refresh_token_expiration() {
        let mut token = RefreshToken::new(Uuid::new_v4(), "digest".to_string(), 60);
        token.expires_at = Utc::now() - Duration::minutes(1);

        assert!(token.is_expired());
        assert!(!token.is_active());
    }

    #[test]
    fn test_token_pair_serialization() {
        let pair = TokenPair::new("access".to_string(), "refresh".to_string());
        let json = serde_json::to_string(&pair).unwrap();
        let back: TokenPair = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, back);
    }
}
