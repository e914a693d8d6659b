//! Tests for the auth orchestration flows

use std::sync::Arc;

use crate::domain::entities::user::UserStatus;
use crate::errors::{ActivationError, AuthError, DomainError};
use crate::repositories::{MockSessionStore, MockUserRepository, UserRepository};
use crate::services::activation::ActivationManager;
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::mail::{MockMailService, OutboundMail};
use crate::services::session::SessionManager;
use crate::services::token::{TokenCodec, TokenCodecConfig};

type TestAuthService = AuthService<MockUserRepository, MockSessionStore, MockMailService>;

struct Fixture {
    auth: TestAuthService,
    users: MockUserRepository,
    mail: MockMailService,
}

fn fixture() -> Fixture {
    let codec = Arc::new(TokenCodec::new(TokenCodecConfig::default()));
    let store = MockSessionStore::new();
    let users = MockUserRepository::new();
    let mail = MockMailService::new();

    let auth = AuthService::new(
        users.clone(),
        SessionManager::new(store.clone(), codec),
        ActivationManager::new(store, 900),
        mail.clone(),
        AuthServiceConfig::default(),
    );

    Fixture { auth, users, mail }
}

/// Pulls the ticket out of an activation email's plain-text body
fn ticket_from_mail(mail: &OutboundMail) -> String {
    let start = mail
        .text_body
        .find("activate/")
        .expect("activation URL in mail body")
        + "activate/".len();
    let rest = &mail.text_body[start..];
    let end = rest.find('?').unwrap_or(rest.len());
    rest[..end].to_string()
}

#[tokio::test]
async fn test_register_creates_inactive_account_and_mails_ticket() {
    let fx = fixture();

    let user = fx.auth.register("a@x.com", "secret1").await.unwrap();
    assert_eq!(user.status, UserStatus::NotActive);

    let sent = fx.mail.sent_messages().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "a@x.com");
    assert!(!ticket_from_mail(&sent[0]).is_empty());
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let fx = fixture();

    fx.auth.register("a@x.com", "secret1").await.unwrap();
    let err = fx.auth.register("a@x.com", "secret2").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::UserAlreadyExists { .. })
    ));
}

#[tokio::test]
async fn test_register_rejects_bad_input_with_field_errors() {
    let fx = fixture();

    let err = fx.auth.register("not-an-email", "abc").await.unwrap_err();
    match err {
        DomainError::ValidationErr(e) => {
            let rendered = e.to_string();
            assert!(rendered.contains("email"));
            assert!(rendered.contains("password"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_register_survives_mail_outage() {
    let fx = fixture();
    fx.mail.set_failing(true).await;

    let user = fx.auth.register("a@x.com", "secret1").await.unwrap();
    assert_eq!(user.status, UserStatus::NotActive);
    assert!(fx.mail.sent_messages().await.is_empty());
}

#[tokio::test]
async fn test_login_requires_activation() {
    let fx = fixture();
    fx.auth.register("a@x.com", "secret1").await.unwrap();

    let err = fx
        .auth
        .login("a@x.com", "secret1", "phone")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::AccountNotActivated)
    ));
}

#[tokio::test]
async fn test_activate_then_login() {
    let fx = fixture();
    let user = fx.auth.register("a@x.com", "secret1").await.unwrap();

    let ticket = ticket_from_mail(&fx.mail.sent_messages().await[0]);
    let activated = fx.auth.activate(&ticket, "email-verify").await.unwrap();
    assert_eq!(activated, user.id);

    let stored = fx.users.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(stored.status, UserStatus::Active);

    let pair = fx.auth.login("a@x.com", "secret1", "phone").await.unwrap();
    assert!(!pair.access_token.is_empty());
}

#[tokio::test]
async fn test_activate_with_unknown_purpose_fails_and_keeps_ticket() {
    let fx = fixture();
    fx.auth.register("a@x.com", "secret1").await.unwrap();

    let ticket = ticket_from_mail(&fx.mail.sent_messages().await[0]);
    let err = fx
        .auth
        .activate(&ticket, "password-reset")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Activation(ActivationError::UnknownPurpose { .. })
    ));

    // Still redeemable for the recognized purpose
    fx.auth.activate(&ticket, "email-verify").await.unwrap();
}

#[tokio::test]
async fn test_login_collapses_credential_failures() {
    let fx = fixture();
    let user = fx.auth.register("a@x.com", "secret1").await.unwrap();
    fx.users
        .update_status(user.id, UserStatus::Active)
        .await
        .unwrap();

    let unknown = fx
        .auth
        .login("b@x.com", "secret1", "phone")
        .await
        .unwrap_err();
    let wrong = fx
        .auth
        .login("a@x.com", "wrong-password", "phone")
        .await
        .unwrap_err();

    for err in [unknown, wrong] {
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::InvalidCredentials)
        ));
    }
}

#[tokio::test]
async fn test_banned_account_cannot_login() {
    let fx = fixture();
    let user = fx.auth.register("a@x.com", "secret1").await.unwrap();
    fx.users
        .update_status(user.id, UserStatus::Banned)
        .await
        .unwrap();

    let err = fx
        .auth
        .login("a@x.com", "secret1", "phone")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::AccountSuspended)
    ));
}

#[tokio::test]
async fn test_session_flows_delegate_end_to_end() {
    let fx = fixture();
    let user = fx.auth.register("a@x.com", "secret1").await.unwrap();
    fx.users
        .update_status(user.id, UserStatus::Active)
        .await
        .unwrap();

    let pair = fx.auth.login("a@x.com", "secret1", "phone").await.unwrap();
    let rotated = fx.auth.refresh(&pair.refresh_token, "phone").await.unwrap();
    assert_ne!(pair.refresh_token, rotated.refresh_token);

    fx.auth.logout(&rotated.refresh_token, "phone").await.unwrap();
    let err = fx
        .auth
        .refresh(&rotated.refresh_token, "phone")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Token(_)));
}
