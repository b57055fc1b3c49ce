//! End-to-end credential lifecycle tests over the in-memory repositories
//!
//! Each test drives a complete client-visible scenario through the public
//! service API: two-step signup, session usage via the guard, refresh
//! rotation and password recovery.

use kg_core::{
    AuthService, AuthServiceConfig, CredentialError, DomainError, MockRefreshTokenRepository,
    MockResetTokenRepository, MockUserRepository, MockVerificationCodeRepository, SecretHasher,
    SessionGuard, TokenService, TokenServiceConfig,
};

type Engine = AuthService<
    MockUserRepository,
    MockRefreshTokenRepository,
    MockVerificationCodeRepository,
    MockResetTokenRepository,
>;

type Guard = SessionGuard<MockUserRepository, MockRefreshTokenRepository>;

/// Builds an engine and a guard sharing the same stores, the way the
/// composition root wires them against one database.
fn build() -> (Engine, Guard) {
    let users = MockUserRepository::new();
    let refresh_tokens = MockRefreshTokenRepository::new();

    let engine = AuthService::new(
        users.clone(),
        MockVerificationCodeRepository::new(),
        MockResetTokenRepository::new(),
        TokenService::new(refresh_tokens.clone(), TokenServiceConfig::default()),
        SecretHasher::new(4),
        AuthServiceConfig::default(),
    );
    let guard = SessionGuard::new(
        users,
        TokenService::new(refresh_tokens, TokenServiceConfig::default()),
    );
    (engine, guard)
}

#[tokio::test]
async fn signup_then_access_protected_state() {
    let (engine, guard) = build();

    let delivery = engine.signup_send_code("alice@example.com").await.unwrap();
    let response = engine
        .signup_verify("alice@example.com", &delivery.code, "Secret123")
        .await
        .unwrap();

    // The access token from signup immediately authenticates.
    let profile = guard.current_user(&response.access_token).await.unwrap();
    assert_eq!(profile.email, "alice@example.com");
    assert_eq!(profile.id, response.user.id);
}

#[tokio::test]
async fn login_then_rotate_session_chain() {
    let (engine, guard) = build();

    let delivery = engine.signup_send_code("alice@example.com").await.unwrap();
    engine
        .signup_verify("alice@example.com", &delivery.code, "Secret123")
        .await
        .unwrap();

    let login = engine.login("alice@example.com", "Secret123").await.unwrap();
    let rotated = engine.refresh(&login.refresh_token).await.unwrap();

    // Both hops of the chain produced working access tokens.
    guard.current_user(&login.access_token).await.unwrap();
    guard.current_user(&rotated.access_token).await.unwrap();

    // The consumed refresh token cannot start a second chain.
    let replay = engine.refresh(&login.refresh_token).await;
    assert!(matches!(
        replay.unwrap_err(),
        DomainError::Credential(CredentialError::InvalidOrExpired)
    ));
}

#[tokio::test]
async fn recovery_flow_locks_out_old_credentials() {
    let (engine, guard) = build();

    let delivery = engine.signup_send_code("alice@example.com").await.unwrap();
    engine
        .signup_verify("alice@example.com", &delivery.code, "Secret123")
        .await
        .unwrap();
    let session = engine.login("alice@example.com", "Secret123").await.unwrap();

    let reset_code = engine
        .request_password_reset("alice@example.com")
        .await
        .unwrap()
        .expect("active account gets a reset code");
    let grant = engine
        .verify_reset_code("alice@example.com", &reset_code.code)
        .await
        .unwrap();
    engine
        .change_password(&grant.reset_token, "Rotated456")
        .await
        .unwrap();

    // Old password and old session chain are both dead.
    assert!(engine.login("alice@example.com", "Secret123").await.is_err());
    assert!(engine.refresh(&session.refresh_token).await.is_err());

    // New password works end to end.
    let fresh = engine
        .login("alice@example.com", "Rotated456")
        .await
        .unwrap();
    guard.current_user(&fresh.access_token).await.unwrap();
}

#[tokio::test]
async fn probing_reveals_nothing_about_registered_emails() {
    let (engine, _) = build();

    let delivery = engine.signup_send_code("alice@example.com").await.unwrap();
    engine
        .signup_verify("alice@example.com", &delivery.code, "Secret123")
        .await
        .unwrap();

    // Login probes: registered-wrong-password and unregistered are equal.
    let registered = engine
        .login("alice@example.com", "WrongGuess1")
        .await
        .unwrap_err();
    let unregistered = engine
        .login("nobody@example.com", "WrongGuess1")
        .await
        .unwrap_err();
    assert_eq!(registered, unregistered);

    // Reset-request probes: both acknowledge identically at the boundary,
    // which the engine signals by Ok in both cases.
    assert!(engine
        .request_password_reset("nobody@example.com")
        .await
        .unwrap()
        .is_none());
    let issued = engine
        .request_password_reset("alice@example.com")
        .await
        .unwrap()
        .expect("active account gets a reset code");

    // Reset-code probes against either address fail with the same error.
    let wrong = if issued.code == "000000" { "000001" } else { "000000" };
    let known = engine
        .verify_reset_code("alice@example.com", wrong)
        .await
        .unwrap_err();
    let unknown = engine
        .verify_reset_code("nobody@example.com", wrong)
        .await
        .unwrap_err();
    assert_eq!(known, unknown);
}
