//! Main credential lifecycle engine implementation

use tracing::{info, warn};

use crate::domain::entities::reset_token::ResetToken;
use crate::domain::entities::user::User;
use crate::domain::entities::verification_code::{CodePurpose, VerificationCode};
use crate::domain::value_objects::auth_response::{
    AuthResponse, CodeDelivery, ResetTokenGrant,
};
use crate::errors::{CredentialError, DomainResult};
use crate::repositories::{
    RefreshTokenRepository, ResetTokenRepository, UserRepository, VerificationCodeRepository,
};
use crate::services::hasher::SecretHasher;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Credential lifecycle engine
///
/// Owns every state transition of the credential model: two-step signup,
/// password login, refresh token rotation and the code-then-token password
/// recovery flow. The engine is stateless between calls; everything durable
/// lives behind the repository traits.
///
/// Failure modes that could reveal account existence collapse into generic
/// errors: a caller probing `login` or `signup_verify` learns nothing about
/// whether the email is registered, and an expired, consumed or fabricated
/// credential all fail identically.
pub struct AuthService<U, T, C, R>
where
    U: UserRepository,
    T: RefreshTokenRepository,
    C: VerificationCodeRepository,
    R: ResetTokenRepository,
{
    user_repository: U,
    code_repository: C,
    reset_repository: R,
    token_service: TokenService<T>,
    hasher: SecretHasher,
    config: AuthServiceConfig,
    /// Throwaway digest verified on absent-record branches so a probe
    /// against an unknown email costs the same as one against a known
    /// email with a wrong secret
    dummy_digest: String,
}

impl<U, T, C, R> AuthService<U, T, C, R>
where
    U: UserRepository,
    T: RefreshTokenRepository,
    C: VerificationCodeRepository,
    R: ResetTokenRepository,
{
    /// Creates a new credential lifecycle engine
    pub fn new(
        user_repository: U,
        code_repository: C,
        reset_repository: R,
        token_service: TokenService<T>,
        hasher: SecretHasher,
        config: AuthServiceConfig,
    ) -> Self {
        let dummy_digest = hasher.hash("keygate-timing-pad").unwrap_or_default();
        Self {
            user_repository,
            code_repository,
            reset_repository,
            token_service,
            hasher,
            config,
            dummy_digest,
        }
    }

    /// Burns one hash verification against the throwaway digest
    fn burn_verification(&self, presented: &str) {
        self.hasher.verify(presented, &self.dummy_digest);
    }

    /// Starts the two-step signup by issuing a verification code
    ///
    /// Reserves a user row for the email if none exists, so the email is
    /// claimed for the duration of the verification window. Re-sending for
    /// a still-reserved email is allowed and supersedes earlier codes.
    ///
    /// # Arguments
    ///
    /// * `email` - Address to issue the code for (validated at the boundary)
    ///
    /// # Returns
    ///
    /// * `Ok(CodeDelivery)` - Plaintext code and expiry for the notifier
    /// * `Err(DomainError)` - `AlreadyExists` if an active account holds
    ///   the email, or a store error
    pub async fn signup_send_code(&self, email: &str) -> DomainResult<CodeDelivery> {
        match self.user_repository.find_by_email(email).await? {
            Some(user) if user.is_active => {
                return Err(CredentialError::AlreadyExists.into());
            }
            Some(_) => {
                // Reserved row from an earlier send; keep it and reissue.
            }
            None => {
                self.user_repository.save(User::reserve(email.to_string())).await?;
            }
        }

        // A new code supersedes every earlier unused one for this flow.
        self.code_repository
            .invalidate_all(email, CodePurpose::Signup)
            .await?;

        let code = VerificationCode::generate_code();
        let record = VerificationCode::new(
            email.to_string(),
            self.hasher.hash(&code)?,
            CodePurpose::Signup,
            self.config.verification_code_ttl_minutes,
        );
        let record = self.code_repository.save(record).await?;

        info!(email = %email, "Issued signup verification code");

        Ok(CodeDelivery {
            email: email.to_string(),
            code,
            expires_at: record.expires_at,
        })
    }

    /// Completes signup by verifying the emailed code and setting a password
    ///
    /// Password policy is enforced at the boundary before this call. Any
    /// mismatch, expiry or absence of a code fails with the same generic
    /// error.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - The activated user with a fresh token pair
    /// * `Err(DomainError)` - `InvalidOrExpired` on any code failure
    pub async fn signup_verify(
        &self,
        email: &str,
        code: &str,
        password: &str,
    ) -> DomainResult<AuthResponse> {
        let record = match self
            .code_repository
            .find_unused(email, CodePurpose::Signup)
            .await?
        {
            Some(record) => record,
            None => {
                self.burn_verification(code);
                return Err(CredentialError::InvalidOrExpired.into());
            }
        };

        if !self.hasher.verify(code, &record.code_hash) {
            return Err(CredentialError::InvalidOrExpired.into());
        }

        let password_hash = self.hasher.hash(password)?;
        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) if user.is_active => {
                // Activated concurrently; the code no longer proves anything.
                return Err(CredentialError::InvalidOrExpired.into());
            }
            Some(mut reserved) => {
                reserved.activate(password_hash);
                self.user_repository.save(reserved).await?
            }
            None => {
                self.user_repository
                    .save(User::new(email.to_string(), password_hash))
                    .await?
            }
        };

        self.code_repository
            .invalidate_all(email, CodePurpose::Signup)
            .await?;

        let pair = self.token_service.issue_pair(user.id).await?;
        info!(user_id = %user.id, "Signup completed");

        Ok(AuthResponse::from_token_pair(pair, &user))
    }

    /// Authenticates with email and password
    ///
    /// Unknown email, wrong password and a reserved or deactivated account
    /// all fail with the same `InvalidCredentials`. A successful login
    /// first invalidates every outstanding refresh token of the user, so
    /// there is exactly one live session chain per account.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) if user.can_login() => user,
            _ => {
                self.burn_verification(password);
                return Err(CredentialError::InvalidCredentials.into());
            }
        };

        if !self.hasher.verify(password, &user.password_hash) {
            return Err(CredentialError::InvalidCredentials.into());
        }

        self.token_service
            .repository()
            .invalidate_all_for_user(user.id)
            .await?;

        let pair = self.token_service.issue_pair(user.id).await?;
        info!(user_id = %user.id, "User logged in");

        Ok(AuthResponse::from_token_pair(pair, &user))
    }

    /// Rotates a refresh token into a fresh token pair
    ///
    /// The presented token is consumed with a compare-and-set, so under
    /// concurrent presentation exactly one caller wins; everyone else sees
    /// the same `InvalidOrExpired` as an expired or fabricated token.
    pub async fn refresh(&self, presented: &str) -> DomainResult<AuthResponse> {
        let digest = TokenService::<T>::digest(presented);

        let record = self
            .token_service
            .repository()
            .find_active(&digest)
            .await?
            .ok_or(CredentialError::InvalidOrExpired)?;

        if !self.token_service.repository().invalidate(&digest).await? {
            // Lost the race against a concurrent rotation of the same token.
            warn!(user_id = %record.user_id, "Refresh token presented twice");
            return Err(CredentialError::InvalidOrExpired.into());
        }

        let user = self
            .user_repository
            .find_by_id(record.user_id)
            .await?
            .filter(|u| u.can_login())
            .ok_or(CredentialError::InvalidOrExpired)?;

        let pair = self.token_service.issue_pair(user.id).await?;

        Ok(AuthResponse::from_token_pair(pair, &user))
    }

    /// Starts password recovery by issuing a reset verification code
    ///
    /// Returns `None` for an unknown or unloginable email so the boundary
    /// can answer with the identical generic acknowledgement either way.
    pub async fn request_password_reset(
        &self,
        email: &str,
    ) -> DomainResult<Option<CodeDelivery>> {
        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) if user.can_login() => user,
            _ => return Ok(None),
        };

        self.code_repository
            .invalidate_all(email, CodePurpose::PasswordReset)
            .await?;

        let code = VerificationCode::generate_code();
        let record = VerificationCode::new(
            email.to_string(),
            self.hasher.hash(&code)?,
            CodePurpose::PasswordReset,
            self.config.verification_code_ttl_minutes,
        );
        let record = self.code_repository.save(record).await?;

        info!(user_id = %user.id, "Issued password reset code");

        Ok(Some(CodeDelivery {
            email: email.to_string(),
            code,
            expires_at: record.expires_at,
        }))
    }

    /// Exchanges a reset verification code for a one-shot reset token
    ///
    /// On success the code is consumed and the plaintext reset token is
    /// returned exactly once; only its digest is stored.
    pub async fn verify_reset_code(
        &self,
        email: &str,
        code: &str,
    ) -> DomainResult<ResetTokenGrant> {
        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) if user.can_login() => user,
            _ => {
                self.burn_verification(code);
                return Err(CredentialError::InvalidOrExpired.into());
            }
        };

        let record = match self
            .code_repository
            .find_unused(email, CodePurpose::PasswordReset)
            .await?
        {
            Some(record) => record,
            None => {
                self.burn_verification(code);
                return Err(CredentialError::InvalidOrExpired.into());
            }
        };

        if !self.hasher.verify(code, &record.code_hash) {
            return Err(CredentialError::InvalidOrExpired.into());
        }

        self.code_repository
            .invalidate_all(email, CodePurpose::PasswordReset)
            .await?;

        let (plaintext, digest) = self.token_service.mint_reset_secret();
        self.reset_repository
            .save(ResetToken::new(
                user.id,
                digest,
                self.config.reset_token_ttl_minutes,
            ))
            .await?;

        info!(user_id = %user.id, "Reset code verified, reset token minted");

        Ok(ResetTokenGrant {
            reset_token: plaintext,
        })
    }

    /// Consumes a reset token and overwrites the user's password
    ///
    /// The token is consumed with a compare-and-set before the password is
    /// touched, and every refresh token of the user is invalidated
    /// afterwards so stolen sessions do not survive a recovery.
    pub async fn change_password(
        &self,
        reset_token: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        let digest = TokenService::<T>::digest(reset_token);

        let record = self
            .reset_repository
            .find_active(&digest)
            .await?
            .ok_or(CredentialError::InvalidOrExpired)?;

        if !self.reset_repository.invalidate(&digest).await? {
            return Err(CredentialError::InvalidOrExpired.into());
        }

        let mut user = self
            .user_repository
            .find_by_id(record.user_id)
            .await?
            .ok_or(CredentialError::InvalidOrExpired)?;

        user.set_password_hash(self.hasher.hash(new_password)?);
        self.user_repository.save(user).await?;

        let revoked = self
            .token_service
            .repository()
            .invalidate_all_for_user(record.user_id)
            .await?;
        info!(
            user_id = %record.user_id,
            revoked_sessions = revoked,
            "Password changed via reset token"
        );

        Ok(())
    }

    /// Access to the underlying token service
    pub fn token_service(&self) -> &TokenService<T> {
        &self.token_service
    }

    /// Access to the underlying user repository
    pub fn user_repository(&self) -> &U {
        &self.user_repository
    }
}
