//! In-memory mock implementation of UserRepository for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::r#trait::UserRepository;

/// Mock user repository backed by a shared vector
///
/// Clones share the underlying store, mirroring how pool-backed
/// implementations behave.
#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock repository seeded with an existing user
    pub fn with_existing_user(user: User) -> Self {
        let repo = Self::new();
        repo.users.lock().unwrap().push(user);
        repo
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    /// Whether the repository is empty
    pub fn is_empty(&self) -> bool {
        self.users.lock().unwrap().is_empty()
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.lock().unwrap();
        if let Some(existing) = users.iter_mut().find(|u| u.id == user.id) {
            *existing = user.clone();
        } else {
            if users.iter().any(|u| u.email == user.email) {
                return Err(DomainError::database("Duplicate email"));
            }
            users.push(user.clone());
        }
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = MockUserRepository::new();
        let user = User::new("a@x.com".to_string(), "$2b$12$digest".to_string());

        let saved = repo.save(user.clone()).await.unwrap();
        assert_eq!(saved.id, user.id);

        let by_id = repo.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "a@x.com");

        let by_email = repo.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, user.id);
    }

    #[tokio::test]
    async fn test_save_is_upsert() {
        let repo = MockUserRepository::new();
        let mut user = User::reserve("a@x.com".to_string());
        repo.save(user.clone()).await.unwrap();

        user.activate("$2b$12$digest".to_string());
        repo.save(user.clone()).await.unwrap();

        assert_eq!(repo.len(), 1);
        let stored = repo.find_by_email("a@x.com").await.unwrap().unwrap();
        assert!(stored.is_active);
    }

    #[tokio::test]
    async fn test_duplicate_email_insert_rejected() {
        let repo = MockUserRepository::new();
        repo.save(User::reserve("a@x.com".to_string())).await.unwrap();

        let result = repo.save(User::reserve("a@x.com".to_string())).await;
        assert!(result.is_err());
    }
}
