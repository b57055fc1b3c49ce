//! In-memory mock implementation of VerificationCodeRepository for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::entities::verification_code::{CodePurpose, VerificationCode};
use crate::errors::DomainError;

use super::r#trait::VerificationCodeRepository;

/// Mock verification code repository backed by a shared vector
///
/// Clones share the underlying store.
#[derive(Clone)]
pub struct MockVerificationCodeRepository {
    codes: Arc<Mutex<Vec<VerificationCode>>>,
}

impl MockVerificationCodeRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            codes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of unused, unexpired codes for an email and purpose
    pub fn unused_count(&self, email: &str, purpose: CodePurpose) -> usize {
        let codes = self.codes.lock().unwrap();
        codes
            .iter()
            .filter(|c| c.email == email && c.purpose == purpose && c.is_active())
            .count()
    }
}

impl Default for MockVerificationCodeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationCodeRepository for MockVerificationCodeRepository {
    async fn save(&self, code: VerificationCode) -> Result<VerificationCode, DomainError> {
        let mut codes = self.codes.lock().unwrap();
        codes.push(code.clone());
        Ok(code)
    }

    async fn find_unused(
        &self,
        email: &str,
        purpose: CodePurpose,
    ) -> Result<Option<VerificationCode>, DomainError> {
        let codes = self.codes.lock().unwrap();
        Ok(codes
            .iter()
            .filter(|c| c.email == email && c.purpose == purpose && c.is_active())
            .max_by_key(|c| c.created_at)
            .cloned())
    }

    async fn invalidate_all(
        &self,
        email: &str,
        purpose: CodePurpose,
    ) -> Result<usize, DomainError> {
        let mut codes = self.codes.lock().unwrap();
        let mut count = 0;
        for code in codes.iter_mut() {
            if code.email == email && code.purpose == purpose && !code.is_used {
                code.mark_used();
                count += 1;
            }
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_code(email: &str, purpose: CodePurpose) -> VerificationCode {
        VerificationCode::new(email.to_string(), "$2b$12$digest".to_string(), purpose, 10)
    }

    #[tokio::test]
    async fn test_find_unused_returns_newest() {
        let repo = MockVerificationCodeRepository::new();
        let older = make_code("a@x.com", CodePurpose::Signup);
        repo.save(older.clone()).await.unwrap();

        let mut newer = make_code("a@x.com", CodePurpose::Signup);
        newer.created_at = older.created_at + chrono::Duration::seconds(1);
        repo.save(newer.clone()).await.unwrap();

        let found = repo
            .find_unused("a@x.com", CodePurpose::Signup)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, newer.id);
    }

    #[tokio::test]
    async fn test_purposes_are_isolated() {
        let repo = MockVerificationCodeRepository::new();
        repo.save(make_code("a@x.com", CodePurpose::Signup))
            .await
            .unwrap();

        assert!(repo
            .find_unused("a@x.com", CodePurpose::PasswordReset)
            .await
            .unwrap()
            .is_none());

        // Invalidating the reset purpose leaves the signup code alone
        let count = repo
            .invalidate_all("a@x.com", CodePurpose::PasswordReset)
            .await
            .unwrap();
        assert_eq!(count, 0);
        assert_eq!(repo.unused_count("a@x.com", CodePurpose::Signup), 1);
    }

    #[tokio::test]
    async fn test_invalidate_all_marks_every_unused_code() {
        let repo = MockVerificationCodeRepository::new();
        for _ in 0..3 {
            repo.save(make_code("a@x.com", CodePurpose::Signup))
                .await
                .unwrap();
        }

        let count = repo
            .invalidate_all("a@x.com", CodePurpose::Signup)
            .await
            .unwrap();
        assert_eq!(count, 3);
        assert!(repo
            .find_unused("a@x.com", CodePurpose::Signup)
            .await
            .unwrap()
            .is_none());
    }
}
