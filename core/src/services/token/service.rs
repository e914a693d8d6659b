//! Stateless JWT codec implementation

use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenPair};
use crate::errors::{DomainError, TokenError};

use super::config::TokenCodecConfig;

/// Which of the two token classes a codec operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Access,
    Refresh,
}

/// Codec for signing and verifying access and refresh tokens
///
/// Access and refresh tokens use separate symmetric secrets, so a refresh
/// token can never be presented where an access token is expected. The
/// payload carries only registered claims; the subject travels in `aud`.
pub struct TokenCodec {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    validation: Validation,
    config: TokenCodecConfig,
}

impl TokenCodec {
    /// Creates a new codec from configuration
    pub fn new(config: TokenCodecConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        // The audience claim holds a per-user subject id, so it is
        // checked by callers rather than by static validation.
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);

        Self {
            access_encoding: EncodingKey::from_secret(config.access_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(config.refresh_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(config.refresh_secret.as_bytes()),
            validation,
            config,
        }
    }

    /// Access token lifetime in seconds
    pub fn access_ttl_seconds(&self) -> u64 {
        self.config.access_ttl_seconds
    }

    /// Refresh token lifetime in seconds
    pub fn refresh_ttl_seconds(&self) -> u64 {
        self.config.refresh_ttl_seconds
    }

    /// Signs a short-lived access token for a subject
    pub fn encode_access(&self, subject: Uuid) -> Result<String, DomainError> {
        self.sign(subject, TokenKind::Access)
    }

    /// Signs a long-lived refresh token for a subject
    pub fn encode_refresh(&self, subject: Uuid) -> Result<String, DomainError> {
        self.sign(subject, TokenKind::Refresh)
    }

    /// Signs a fresh access/refresh pair for a subject
    pub fn issue_pair(&self, subject: Uuid) -> Result<TokenPair, DomainError> {
        Ok(TokenPair::new(
            self.encode_access(subject)?,
            self.encode_refresh(subject)?,
            self.config.access_ttl_seconds,
            self.config.refresh_ttl_seconds,
        ))
    }

    /// Verifies an access token and returns its claims
    pub fn decode_access(&self, token: &str) -> Result<Claims, DomainError> {
        self.verify(token, TokenKind::Access)
    }

    /// Verifies a refresh token and returns its claims
    pub fn decode_refresh(&self, token: &str) -> Result<Claims, DomainError> {
        self.verify(token, TokenKind::Refresh)
    }

    /// Verifies a refresh token and extracts the subject id it names
    pub fn refresh_subject(&self, token: &str) -> Result<Uuid, DomainError> {
        let claims = self.decode_refresh(token)?;
        claims.subject_id().map_err(|_| {
            TokenError::MissingClaim {
                claim: "aud".to_string(),
            }
            .into()
        })
    }

    fn sign(&self, subject: Uuid, kind: TokenKind) -> Result<String, DomainError> {
        let (key, ttl) = match kind {
            TokenKind::Access => (&self.access_encoding, self.config.access_ttl_seconds),
            TokenKind::Refresh => (&self.refresh_encoding, self.config.refresh_ttl_seconds),
        };

        let claims = Claims::new(subject, self.config.issuer.clone(), ttl);

        encode(&Header::new(Algorithm::HS256), &claims, key)
            .map_err(|_| TokenError::TokenGenerationFailed.into())
    }

    fn verify(&self, token: &str, kind: TokenKind) -> Result<Claims, DomainError> {
        let key = match kind {
            TokenKind::Access => &self.access_decoding,
            TokenKind::Refresh => &self.refresh_decoding,
        };

        decode::<Claims>(token, key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| map_jwt_error(e).into())
    }
}

/// Maps jsonwebtoken failures onto domain token errors.
///
/// Expiry is the only failure a caller may treat differently; every other
/// verification problem collapses to a generic invalid-token class so the
/// error surface leaks nothing about why verification failed.
fn map_jwt_error(err: jsonwebtoken::errors::Error) -> TokenError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => TokenError::InvalidClaims,
        ErrorKind::MissingRequiredClaim(claim) => TokenError::MissingClaim {
            claim: claim.clone(),
        },
        _ => TokenError::InvalidTokenFormat,
    }
}
