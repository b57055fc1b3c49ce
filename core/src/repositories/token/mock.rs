//! In-memory mock implementation of RefreshTokenRepository for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

use super::r#trait::RefreshTokenRepository;

/// Mock refresh token repository keyed by token digest
///
/// Clones share the underlying store.
#[derive(Clone)]
pub struct MockRefreshTokenRepository {
    tokens: Arc<Mutex<HashMap<String, RefreshToken>>>,
}

impl MockRefreshTokenRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Total number of stored records, used and unused
    pub fn len(&self) -> usize {
        self.tokens.lock().unwrap().len()
    }

    /// Whether the repository is empty
    pub fn is_empty(&self) -> bool {
        self.tokens.lock().unwrap().is_empty()
    }
}

impl Default for MockRefreshTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RefreshTokenRepository for MockRefreshTokenRepository {
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let mut tokens = self.tokens.lock().unwrap();
        if tokens.contains_key(&token.token_hash) {
            return Err(DomainError::database("Token digest already exists"));
        }
        tokens.insert(token.token_hash.clone(), token.clone());
        Ok(token)
    }

    async fn find_active(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError> {
        let tokens = self.tokens.lock().unwrap();
        Ok(tokens
            .get(token_hash)
            .filter(|t| t.is_active())
            .cloned())
    }

    async fn invalidate(&self, token_hash: &str) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.lock().unwrap();
        match tokens.get_mut(token_hash) {
            Some(token) if !token.is_used => {
                token.mark_used();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn invalidate_all_for_user(&self, user_id: Uuid) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.lock().unwrap();
        let mut count = 0;
        for token in tokens.values_mut() {
            if token.user_id == user_id && !token.is_used {
                token.mark_used();
                count += 1;
            }
        }
        Ok(count)
    }

    async fn find_active_for_user(&self, user_id: Uuid) -> Result<Vec<RefreshToken>, DomainError> {
        let tokens = self.tokens.lock().unwrap();
        Ok(tokens
            .values()
            .filter(|t| t.user_id == user_id && t.is_active())
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalidate_is_compare_and_set() {
        let repo = MockRefreshTokenRepository::new();
        let token = RefreshToken::new(Uuid::new_v4(), "digest".to_string(), 60);
        repo.save(token).await.unwrap();

        assert!(repo.invalidate("digest").await.unwrap());
        assert!(!repo.invalidate("digest").await.unwrap());
        assert!(!repo.invalidate("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_find_active_skips_used_tokens() {
        let repo = MockRefreshTokenRepository::new();
        let token = RefreshToken::new(Uuid::new_v4(), "digest".to_string(), 60);
        repo.save(token).await.unwrap();

        assert!(repo.find_active("digest").await.unwrap().is_some());
        repo.invalidate("digest").await.unwrap();
        assert!(repo.find_active("digest").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_invalidate_all_for_user() {
        let repo = MockRefreshTokenRepository::new();
        let user_id = Uuid::new_v4();
        for i in 0..3 {
            let token = RefreshToken::new(user_id, format!("digest-{}", i), 60);
            repo.save(token).await.unwrap();
        }

        let count = repo.invalidate_all_for_user(user_id).await.unwrap();
        assert_eq!(count, 3);
        assert!(repo.find_active_for_user(user_id).await.unwrap().is_empty());

        // Second sweep has nothing left to do
        assert_eq!(repo.invalidate_all_for_user(user_id).await.unwrap(), 0);
    }
}
