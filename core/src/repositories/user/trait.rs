//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual storage while keeping the boundary
/// between domain and infrastructure layers. Users are never hard-deleted
/// by the credential engine, so no delete operation is exposed.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with this id
    /// * `Err(DomainError)` - Store error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by email, regardless of activation state
    ///
    /// Reserved rows are returned too; callers inspect `is_active` and
    /// `is_reserved` to decide how to proceed.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Insert or update a user
    ///
    /// # Returns
    /// * `Ok(User)` - The persisted user
    /// * `Err(DomainError)` - Save failed (e.g. duplicate email on insert)
    async fn save(&self, user: User) -> Result<User, DomainError>;
}
