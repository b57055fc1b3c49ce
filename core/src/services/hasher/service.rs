//! Bcrypt-backed secret hasher.

use crate::errors::{DomainError, DomainResult};

/// Hasher for passwords and verification codes
///
/// Both use the same deliberately slow, salted algorithm, so verifying a
/// 6-digit code is never a fast-path timing leak compared to verifying a
/// password. The cost factor is tunable through configuration.
#[derive(Debug, Clone)]
pub struct SecretHasher {
    cost: u32,
}

impl SecretHasher {
    /// Creates a hasher with the given bcrypt cost factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hashes a plaintext secret into a salted digest
    pub fn hash(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(plaintext, self.cost)
            .map_err(|e| DomainError::internal(format!("Failed to hash secret: {}", e)))
    }

    /// Verifies a plaintext secret against a stored digest
    ///
    /// Returns false for malformed or empty digests, which also keeps
    /// reserved accounts (empty digest) unloginable.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        bcrypt::verify(plaintext, digest).unwrap_or(false)
    }
}

impl Default for SecretHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
