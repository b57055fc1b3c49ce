//! Unit tests for the token service

use uuid::Uuid;

use crate::errors::{CredentialError, DomainError};
use crate::repositories::{MockRefreshTokenRepository, RefreshTokenRepository};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> TokenService<MockRefreshTokenRepository> {
    TokenService::new(
        MockRefreshTokenRepository::new(),
        TokenServiceConfig::default(),
    )
}

#[tokio::test]
async fn test_issue_pair_persists_refresh_digest() {
    let service = service();
    let user_id = Uuid::new_v4();

    let pair = service.issue_pair(user_id).await.unwrap();

    // The plaintext secret is never stored, only its digest
    let digest = TokenService::<MockRefreshTokenRepository>::digest(&pair.refresh_token);
    let stored = service
        .repository()
        .find_active(&digest)
        .await
        .unwrap()
        .expect("refresh token should be persisted");

    assert_eq!(stored.user_id, user_id);
    assert_ne!(stored.token_hash, pair.refresh_token);
}

#[tokio::test]
async fn test_access_token_round_trip() {
    let service = service();
    let user_id = Uuid::new_v4();

    let pair = service.issue_pair(user_id).await.unwrap();
    let claims = service.decode_access_token(&pair.access_token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.iss, "keygate");
}

#[tokio::test]
async fn test_tampered_access_token_is_unauthenticated() {
    let service = service();
    let pair = service.issue_pair(Uuid::new_v4()).await.unwrap();

    let mut tampered = pair.access_token.clone();
    tampered.push('x');

    let err = service.decode_access_token(&tampered).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Credential(CredentialError::Unauthenticated)
    ));
}

#[tokio::test]
async fn test_garbage_access_token_is_unauthenticated() {
    let service = service();
    let err = service.decode_access_token("not-a-jwt").unwrap_err();
    assert!(matches!(
        err,
        DomainError::Credential(CredentialError::Unauthenticated)
    ));
}

#[tokio::test]
async fn test_token_signed_with_other_secret_rejected() {
    let service = service();
    let other = TokenService::new(
        MockRefreshTokenRepository::new(),
        TokenServiceConfig {
            jwt_secret: "a-different-secret".to_string(),
            ..TokenServiceConfig::default()
        },
    );

    let pair = other.issue_pair(Uuid::new_v4()).await.unwrap();
    assert!(service.decode_access_token(&pair.access_token).is_err());
}

#[tokio::test]
async fn test_refresh_secrets_are_unique() {
    let service = service();
    let user_id = Uuid::new_v4();

    let first = service.issue_pair(user_id).await.unwrap();
    let second = service.issue_pair(user_id).await.unwrap();

    assert_ne!(first.refresh_token, second.refresh_token);
}

#[test]
fn test_mint_reset_secret_shape() {
    let service = service();
    let (plaintext, digest) = service.mint_reset_secret();

    // 32 random bytes, URL-safe base64 without padding
    assert!(plaintext.len() >= 43);
    assert!(plaintext
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));

    // Digest is SHA-256 hex and reproducible from the plaintext
    assert_eq!(digest.len(), 64);
    assert_eq!(
        digest,
        TokenService::<MockRefreshTokenRepository>::digest(&plaintext)
    );
}

#[test]
fn test_mint_reset_secret_is_high_entropy() {
    let service = service();
    let (a, _) = service.mint_reset_secret();
    let (b, _) = service.mint_reset_secret();
    assert_ne!(a, b);
}
