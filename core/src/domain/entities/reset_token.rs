//! Reset token entity authorizing a single password change.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reset token record
///
/// The store never holds the plaintext secret, only its SHA-256 digest;
/// lookups hash the presented token before querying. The plaintext is
/// returned to the caller exactly once at minting and is unrecoverable
/// thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetToken {
    /// Unique identifier for the record
    pub id: Uuid,

    /// User this token authorizes a password change for
    pub user_id: Uuid,

    /// SHA-256 hex digest of the plaintext token
    pub token_digest: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Whether the token has been consumed
    pub is_used: bool,
}

impl ResetToken {
    /// Creates a new reset token record with the given lifetime
    pub fn new(user_id: Uuid, token_digest: String, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            token_digest,
            created_at: now,
            expires_at: now + Duration::minutes(ttl_minutes),
            is_used: false,
        }
    }

    /// Checks if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the token can still be consumed
    pub fn is_active(&self) -> bool {
        !self.is_expired() && !self.is_used
    }

    /// Marks the token as consumed
    pub fn mark_used(&mut self) {
        self.is_used = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reset_token_is_active() {
        let user_id = Uuid::new_v4();
        let token = ResetToken::new(user_id, "digest".to_string(), 30);

        assert_eq!(token.user_id, user_id);
        assert!(!token.is_used);
        assert!(token.is_active());
    }

    #[test]
    fn test_used_token_is_not_active() {
        let mut token = ResetToken::new(Uuid::new_v4(), "digest".to_string(), 30);
        token.mark_used();

        assert!(!token.is_active());
    }

    #[test]
    fn test_expired_token_is_not_active() {
        let mut token = ResetToken::new(Uuid::new_v4(), "digest".to_string(), 30);
        token.expires_at = Utc::now() - Duration::minutes(1);

        assert!(token.is_expired());
        assert!(!token.is_active());
    }
}
