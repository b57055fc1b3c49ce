//! Reset token repository trait.

use async_trait::async_trait;

use crate::domain::entities::reset_token::ResetToken;
use crate::errors::DomainError;

/// Repository trait for ResetToken persistence operations
///
/// The store holds digests only; the presented token is hashed before
/// lookup. `invalidate` follows the same compare-and-set contract as the
/// refresh token repository so a reset token authorizes exactly one
/// password change.
#[async_trait]
pub trait ResetTokenRepository: Send + Sync {
    /// Save a new reset token record
    async fn save(&self, token: ResetToken) -> Result<ResetToken, DomainError>;

    /// Find an unused, unexpired token by its digest
    async fn find_active(&self, token_digest: &str) -> Result<Option<ResetToken>, DomainError>;

    /// Mark a token used if and only if it is currently unused
    ///
    /// # Returns
    /// * `Ok(true)` - This call consumed the token
    /// * `Ok(false)` - Token absent or already consumed
    async fn invalidate(&self, token_digest: &str) -> Result<bool, DomainError>;
}
