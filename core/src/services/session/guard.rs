//! Session guard resolving bearer tokens to users

use crate::domain::entities::user::User;
use crate::domain::value_objects::auth_response::UserProfile;
use crate::errors::{CredentialError, DomainResult};
use crate::repositories::{RefreshTokenRepository, UserRepository};
use crate::services::token::TokenService;

/// Read-only guard that turns a bearer access token into a user
///
/// Every failure mode collapses into `Unauthenticated`: a malformed token,
/// a bad signature, an expired token and a subject that no longer resolves
/// to a loginable account are indistinguishable to the caller.
pub struct SessionGuard<U, T>
where
    U: UserRepository,
    T: RefreshTokenRepository,
{
    user_repository: U,
    token_service: TokenService<T>,
}

impl<U, T> SessionGuard<U, T>
where
    U: UserRepository,
    T: RefreshTokenRepository,
{
    /// Creates a new session guard
    pub fn new(user_repository: U, token_service: TokenService<T>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Resolves a bearer access token to the full user record
    pub async fn authenticate(&self, bearer: &str) -> DomainResult<User> {
        let claims = self.token_service.decode_access_token(bearer)?;
        let user_id = claims
            .user_id()
            .map_err(|_| CredentialError::Unauthenticated)?;

        self.user_repository
            .find_by_id(user_id)
            .await?
            .filter(|u| u.can_login())
            .ok_or_else(|| CredentialError::Unauthenticated.into())
    }

    /// Resolves a bearer access token to the public user profile
    pub async fn current_user(&self, bearer: &str) -> DomainResult<UserProfile> {
        let user = self.authenticate(bearer).await?;
        Ok(UserProfile::from(&user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;
    use crate::repositories::{MockRefreshTokenRepository, MockUserRepository};
    use crate::services::token::TokenServiceConfig;

    fn guard_with_user(user: User) -> SessionGuard<MockUserRepository, MockRefreshTokenRepository> {
        SessionGuard::new(
            MockUserRepository::with_existing_user(user),
            TokenService::new(
                MockRefreshTokenRepository::new(),
                TokenServiceConfig::default(),
            ),
        )
    }

    fn assert_unauthenticated<V: std::fmt::Debug>(result: DomainResult<V>) {
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Credential(CredentialError::Unauthenticated)
        ));
    }

    #[tokio::test]
    async fn test_valid_token_resolves_the_user() {
        let user = User::new("a@x.com".to_string(), "$2b$12$digest".to_string());
        let guard = guard_with_user(user.clone());

        let pair = guard.token_service.issue_pair(user.id).await.unwrap();
        let resolved = guard.authenticate(&pair.access_token).await.unwrap();
        assert_eq!(resolved.id, user.id);

        let profile = guard.current_user(&pair.access_token).await.unwrap();
        assert_eq!(profile.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_malformed_token_is_unauthenticated() {
        let user = User::new("a@x.com".to_string(), "$2b$12$digest".to_string());
        let guard = guard_with_user(user);

        assert_unauthenticated(guard.authenticate("not-a-jwt").await);
    }

    #[tokio::test]
    async fn test_unresolvable_subject_is_unauthenticated() {
        let user = User::new("a@x.com".to_string(), "$2b$12$digest".to_string());
        let guard = guard_with_user(user);

        // Signed for a user id the store has never seen.
        let pair = guard
            .token_service
            .issue_pair(uuid::Uuid::new_v4())
            .await
            .unwrap();
        assert_unauthenticated(guard.authenticate(&pair.access_token).await);
    }

    #[tokio::test]
    async fn test_deactivated_account_is_unauthenticated() {
        let mut user = User::new("a@x.com".to_string(), "$2b$12$digest".to_string());
        user.is_active = false;
        let id = user.id;
        let guard = guard_with_user(user);

        let pair = guard.token_service.issue_pair(id).await.unwrap();
        assert_unauthenticated(guard.authenticate(&pair.access_token).await);
    }
}
