//! User entity representing an identity record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity
///
/// A user is created in one of two ways: fully formed at signup
/// completion, or as a *reservation* during the send-code step of the
/// two-step signup. A reservation has an empty password hash and is not
/// active; `signup-verify` completes it. Users are never hard-deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, unique, case-sensitive as stored
    pub email: String,

    /// Optional unique username
    pub username: Option<String>,

    /// Bcrypt digest of the password; empty string means the account is
    /// reserved but not yet activated
    pub password_hash: String,

    /// Whether the account has been activated
    pub is_active: bool,

    /// Whether the user has administrative privileges
    pub is_admin: bool,

    /// Optional department the user belongs to
    pub department: Option<String>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new active user with the given password hash
    pub fn new(email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            username: None,
            password_hash,
            is_active: true,
            is_admin: false,
            department: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a reserved user row for an email awaiting verification
    pub fn reserve(email: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            username: None,
            password_hash: String::new(),
            is_active: false,
            is_admin: false,
            department: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks whether this row is a reservation awaiting activation
    pub fn is_reserved(&self) -> bool {
        self.password_hash.is_empty()
    }

    /// Completes a reservation: sets the password hash and activates
    pub fn activate(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.is_active = true;
        self.updated_at = Utc::now();
    }

    /// Overwrites the password hash (password change)
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Checks whether the account can authenticate with a password
    ///
    /// Reserved and deactivated accounts cannot log in.
    pub fn can_login(&self) -> bool {
        self.is_active && !self.password_hash.is_empty()
    }
}
