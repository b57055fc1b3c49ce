//! In-memory mock implementation of ResetTokenRepository for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::entities::reset_token::ResetToken;
use crate::errors::DomainError;

use super::r#trait::ResetTokenRepository;

/// Mock reset token repository keyed by token digest
///
/// Clones share the underlying store.
#[derive(Clone)]
pub struct MockResetTokenRepository {
    tokens: Arc<Mutex<HashMap<String, ResetToken>>>,
}

impl MockResetTokenRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl Default for MockResetTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResetTokenRepository for MockResetTokenRepository {
    async fn save(&self, token: ResetToken) -> Result<ResetToken, DomainError> {
        let mut tokens = self.tokens.lock().unwrap();
        if tokens.contains_key(&token.token_digest) {
            return Err(DomainError::database("Token digest already exists"));
        }
        tokens.insert(token.token_digest.clone(), token.clone());
        Ok(token)
    }

    async fn find_active(&self, token_digest: &str) -> Result<Option<ResetToken>, DomainError> {
        let tokens = self.tokens.lock().unwrap();
        Ok(tokens
            .get(token_digest)
            .filter(|t| t.is_active())
            .cloned())
    }

    async fn invalidate(&self, token_digest: &str) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.lock().unwrap();
        match tokens.get_mut(token_digest) {
            Some(token) if !token.is_used => {
                token.mark_used();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_single_use() {
        let repo = MockResetTokenRepository::new();
        let token = ResetToken::new(Uuid::new_v4(), "digest".to_string(), 30);
        repo.save(token).await.unwrap();

        assert!(repo.find_active("digest").await.unwrap().is_some());
        assert!(repo.invalidate("digest").await.unwrap());
        assert!(!repo.invalidate("digest").await.unwrap());
        assert!(repo.find_active("digest").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_digest_matches_nothing() {
        let repo = MockResetTokenRepository::new();
        assert!(repo.find_active("missing").await.unwrap().is_none());
        assert!(!repo.invalidate("missing").await.unwrap());
    }
}
