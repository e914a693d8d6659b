//! Tests for the JWT codec

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};
use crate::services::token::{TokenCodec, TokenCodecConfig};

fn codec() -> TokenCodec {
    TokenCodec::new(TokenCodecConfig::default())
}

/// Signs raw claims with the given secret, bypassing the codec
fn sign_raw(claims: &Claims, secret: &str) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[test]
fn test_issue_pair_roundtrip() {
    let codec = codec();
    let subject = Uuid::new_v4();

    let pair = codec.issue_pair(subject).unwrap();
    assert_eq!(pair.access_expires_in, 3_600);
    assert_eq!(pair.refresh_expires_in, 31_536_000);

    let access = codec.decode_access(&pair.access_token).unwrap();
    assert_eq!(access.subject_id().unwrap(), subject);
    assert_eq!(access.iss, "keyport");

    let refresh = codec.decode_refresh(&pair.refresh_token).unwrap();
    assert_eq!(refresh.subject_id().unwrap(), subject);
}

#[test]
fn test_access_and_refresh_secrets_are_disjoint() {
    let codec = codec();
    let pair = codec.issue_pair(Uuid::new_v4()).unwrap();

    let err = codec.decode_refresh(&pair.access_token).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidSignature)
    ));

    let err = codec.decode_access(&pair.refresh_token).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidSignature)
    ));
}

#[test]
fn test_expired_token_is_rejected() {
    let codec = codec();
    let subject = Uuid::new_v4();

    // Well past the verifier's default 60 second leeway
    let mut claims = Claims::new(subject, "keyport", 3_600);
    claims.exp = Utc::now().timestamp() - 120;
    claims.iat = claims.exp - 3_600;

    let token = sign_raw(&claims, "dev-access-secret");
    let err = codec.decode_access(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
}

#[test]
fn test_foreign_issuer_is_rejected() {
    let codec = codec();
    let claims = Claims::new(Uuid::new_v4(), "someone-else", 3_600);

    let token = sign_raw(&claims, "dev-access-secret");
    let err = codec.decode_access(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidClaims)));
}

#[test]
fn test_token_signed_with_wrong_secret_is_rejected() {
    let codec = codec();
    let claims = Claims::new(Uuid::new_v4(), "keyport", 3_600);

    let token = sign_raw(&claims, "not-the-secret");
    let err = codec.decode_access(&token).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidSignature)
    ));
}

#[test]
fn test_garbage_token_is_rejected() {
    let codec = codec();
    let err = codec.decode_access("not.a.jwt").unwrap_err();
    assert!(matches!(err, DomainError::Token(_)));
}

#[test]
fn test_refresh_subject_extraction() {
    let codec = codec();
    let subject = Uuid::new_v4();

    let token = codec.encode_refresh(subject).unwrap();
    assert_eq!(codec.refresh_subject(&token).unwrap(), subject);
}
