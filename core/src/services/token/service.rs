//! Main token service implementation

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, RefreshToken, TokenPair};
use crate::errors::{CredentialError, DomainError, DomainResult};
use crate::repositories::RefreshTokenRepository;

use super::config::TokenServiceConfig;

/// Number of random bytes in a refresh token secret
const REFRESH_SECRET_BYTES: usize = 32;

/// Service producing and verifying the two bearer credentials
///
/// Access tokens are signed JWTs carrying only the user id as subject.
/// Refresh tokens and reset secrets are opaque random strings; only their
/// SHA-256 digests ever reach the store.
pub struct TokenService<R: RefreshTokenRepository> {
    repository: R,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl<R: RefreshTokenRepository> TokenService<R> {
    /// Creates a new token service instance
    pub fn new(repository: R, config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;

        Self {
            repository,
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a fresh access/refresh pair for a user
    ///
    /// The refresh secret is persisted as its digest before the pair is
    /// returned; the plaintexts in the pair are the only copies.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The subject the pair is issued for
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The generated pair
    /// * `Err(DomainError)` - Signing or persistence failed
    pub async fn issue_pair(&self, user_id: Uuid) -> DomainResult<TokenPair> {
        let access_token = self.generate_access_token(user_id)?;

        let refresh_secret = Self::generate_opaque_secret(REFRESH_SECRET_BYTES);
        let record = RefreshToken::new(
            user_id,
            Self::digest(&refresh_secret),
            self.config.refresh_token_expiry_minutes,
        );
        self.repository.save(record).await?;

        Ok(TokenPair::new(access_token, refresh_secret))
    }

    /// Signs an access token for a user
    fn generate_access_token(&self, user_id: Uuid) -> DomainResult<String> {
        let claims = Claims::new_access_token(
            user_id,
            &self.config.issuer,
            self.config.access_token_expiry_minutes,
        );
        let header = Header::new(self.config.algorithm);
        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to sign access token: {}", e)))
    }

    /// Decodes and validates an access token
    ///
    /// Any signature, format or expiry failure maps to the single
    /// `Unauthenticated` error so callers cannot distinguish the cause.
    pub fn decode_access_token(&self, token: &str) -> DomainResult<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| CredentialError::Unauthenticated)?;
        Ok(data.claims)
    }

    /// Mints a reset token secret and its digest
    ///
    /// The plaintext is returned exactly once; the store receives only
    /// the digest.
    ///
    /// # Returns
    ///
    /// `(plaintext, digest)` where the plaintext is a URL-safe encoding
    /// of at least 32 random bytes.
    pub fn mint_reset_secret(&self) -> (String, String) {
        let plaintext = Self::generate_opaque_secret(self.config.reset_token_bytes);
        let digest = Self::digest(&plaintext);
        (plaintext, digest)
    }

    /// Access to the underlying refresh token repository
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Generates a high-entropy opaque secret, URL-safe encoded
    fn generate_opaque_secret(bytes: usize) -> String {
        let mut buf = vec![0u8; bytes];
        rand::thread_rng().fill_bytes(&mut buf);
        URL_SAFE_NO_PAD.encode(&buf)
    }

    /// SHA-256 hex digest used for opaque-token storage and lookup
    pub fn digest(secret: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(secret.as_bytes());
        hex::encode(hasher.finalize())
    }
}
