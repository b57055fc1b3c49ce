//! Response value objects produced by the credential engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;

/// Public projection of a user, safe to return to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User id
    pub id: Uuid,

    /// Email address
    pub email: String,

    /// Optional username
    pub username: Option<String>,

    /// Optional department
    pub department: Option<String>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
            department: user.department.clone(),
        }
    }
}

/// Authentication response containing the issued tokens and the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed JWT access token
    pub access_token: String,

    /// Opaque refresh token secret
    pub refresh_token: String,

    /// Token scheme, always "bearer"
    pub token_type: String,

    /// The authenticated user
    pub user: UserProfile,
}

impl AuthResponse {
    /// Creates an authentication response from a token pair and user
    pub fn from_token_pair(pair: TokenPair, user: &User) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: "bearer".to_string(),
            user: UserProfile::from(user),
        }
    }
}

/// Delivery payload for a freshly issued verification code
///
/// Carries the plaintext code for the notification collaborator to send;
/// the engine itself stores only the digest. Delivery is fire-and-forget
/// relative to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeDelivery {
    /// Email address to deliver to
    pub email: String,

    /// Plaintext 6-digit code
    pub code: String,

    /// When the code stops being accepted
    pub expires_at: DateTime<Utc>,
}

/// One-shot grant of a plaintext reset token
///
/// The plaintext is unrecoverable after this value is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetTokenGrant {
    /// Plaintext reset token, returned exactly once
    pub reset_token: String,
}
