//! Refresh token repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for RefreshToken persistence operations
///
/// Tokens are stored by digest only. Invalidation is a compare-and-set:
/// the store flips `is_used` only when it is currently unset and reports
/// whether a row changed. Two concurrent rotations of the same token must
/// therefore observe exactly one `true`, which is what makes rotation
/// single-use under concurrency.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Save a new refresh token record
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The persisted record
    /// * `Err(DomainError)` - Save failed (e.g. duplicate digest)
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find an unused, unexpired token by its digest
    ///
    /// Used and expired records match nothing, so a consumed token is
    /// indistinguishable from one that never existed.
    async fn find_active(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Mark a token used if and only if it is currently unused
    ///
    /// # Returns
    /// * `Ok(true)` - This call consumed the token
    /// * `Ok(false)` - Token absent or already consumed
    /// * `Err(DomainError)` - Store error occurred
    async fn invalidate(&self, token_hash: &str) -> Result<bool, DomainError>;

    /// Mark every unused token of a user as used
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of tokens invalidated
    async fn invalidate_all_for_user(&self, user_id: Uuid) -> Result<usize, DomainError>;

    /// Find all active tokens for a user
    async fn find_active_for_user(&self, user_id: Uuid) -> Result<Vec<RefreshToken>, DomainError>;
}
