//! Verification code entity for email-based one-time codes.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the numeric verification code
pub const CODE_LENGTH: usize = 6;

/// Flow a verification code was issued for
///
/// Stored explicitly so a code issued for one flow can never be replayed
/// into the other, even when both flows run concurrently for one email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodePurpose {
    /// Two-step signup verification
    Signup,
    /// Password recovery
    PasswordReset,
}

impl CodePurpose {
    /// Stable string form used by the persistence layer
    pub fn as_str(&self) -> &'static str {
        match self {
            CodePurpose::Signup => "signup",
            CodePurpose::PasswordReset => "password_reset",
        }
    }
}

impl std::str::FromStr for CodePurpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "signup" => Ok(CodePurpose::Signup),
            "password_reset" => Ok(CodePurpose::PasswordReset),
            other => Err(format!("Unknown code purpose: {}", other)),
        }
    }
}

/// Verification code record
///
/// The code is bound to an email rather than a user id because the account
/// may not exist yet during signup. Only the bcrypt digest of the code is
/// stored; records are invalidated, never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Email address this code was issued for
    pub email: String,

    /// Bcrypt digest of the 6-digit code
    pub code_hash: String,

    /// Flow this code belongs to
    pub purpose: CodePurpose,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Whether the code has been consumed or invalidated
    pub is_used: bool,
}

impl VerificationCode {
    /// Creates a new verification code record from a code digest
    pub fn new(
        email: String,
        code_hash: String,
        purpose: CodePurpose,
        ttl_minutes: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            code_hash,
            purpose,
            created_at: now,
            expires_at: now + Duration::minutes(ttl_minutes),
            is_used: false,
        }
    }

    /// Generates a uniform random 6-digit numeric code
    ///
    /// Leading zeros are preserved in the textual form.
    pub fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        let code: u32 = rng.gen_range(0..1_000_000);
        format!("{:06}", code)
    }

    /// Checks if the code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the code can still be consumed
    pub fn is_active(&self) -> bool {
        !self.is_expired() && !self.is_used
    }

    /// Marks the code as consumed
    pub fn mark_used(&mut self) {
        self.is_used = true;
    }
}
