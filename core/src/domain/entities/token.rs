//! Token entities for JWT-based session management.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Namespace prefix for session keys in the backing store
pub const SESSION_KEY_PREFIX: &str = "session";

/// Claims structure for JWT payloads
///
/// The audience claim carries the subject (user) id the token was issued
/// to; the payload is otherwise a bare registered-claims set. Audience is
/// therefore per-user and checked by callers, not by static validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Audience: the subject (user) id
    pub aud: String,

    /// Issuer
    pub iss: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a token issued to `subject`, expiring
    /// `ttl_seconds` from now
    pub fn new(subject: Uuid, issuer: impl Into<String>, ttl_seconds: u64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds as i64);

        Self {
            aud: subject.to_string(),
            iss: issuer.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Gets the subject id from the audience claim
    pub fn subject_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.aud)
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Key naming one revocable session: subject identity plus device fingerprint.
///
/// One key maps to at most one live refresh token; writing a new value for
/// the same key supersedes the previous session for that device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionKey {
    subject: Uuid,
    fingerprint: String,
}

impl SessionKey {
    /// Creates a session key for a subject and device fingerprint.
    ///
    /// Colons are reserved as the key separator, so any in the fingerprint
    /// are replaced before the key is formed.
    pub fn new(subject: Uuid, fingerprint: &str) -> Self {
        Self {
            subject,
            fingerprint: fingerprint.replace(':', "-"),
        }
    }

    /// The storage key under which the refresh token is persisted:
    /// `session:<subject>:<fingerprint>`
    pub fn storage_key(&self) -> String {
        format!("{}:{}:{}", SESSION_KEY_PREFIX, self.subject, self.fingerprint)
    }

    /// Glob pattern matching every session key for a subject, across all
    /// device fingerprints
    pub fn subject_pattern(subject: Uuid) -> String {
        format!("{}:{}:*", SESSION_KEY_PREFIX, subject)
    }

    pub fn subject(&self) -> Uuid {
        self.subject
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed access token (stateless, short-lived)
    pub access_token: String,

    /// Signed refresh token (server-tracked, long-lived)
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub access_expires_in: u64,

    /// Refresh token lifetime in seconds
    pub refresh_expires_in: u64,
}

impl TokenPair {
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expires_in: u64,
        refresh_expires_in: u64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in,
            refresh_expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_construction() {
        let subject = Uuid::new_v4();
        let claims = Claims::new(subject, "keyport", 3_600);

        assert_eq!(claims.aud, subject.to_string());
        assert_eq!(claims.iss, "keyport");
        assert_eq!(claims.exp - claims.iat, 3_600);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_subject_id_roundtrip() {
        let subject = Uuid::new_v4();
        let claims = Claims::new(subject, "keyport", 60);
        assert_eq!(claims.subject_id().unwrap(), subject);
    }

    #[test]
    fn test_claims_expiry() {
        let mut claims = Claims::new(Uuid::new_v4(), "keyport", 3_600);
        claims.exp = Utc::now().timestamp() - 1;
        assert!(claims.is_expired());
    }

    #[test]
    fn test_session_key_layout() {
        let subject = Uuid::new_v4();
        let key = SessionKey::new(subject, "device-a");
        assert_eq!(
            key.storage_key(),
            format!("session:{}:device-a", subject)
        );
    }

    #[test]
    fn test_session_key_sanitizes_fingerprint() {
        let subject = Uuid::new_v4();
        let key = SessionKey::new(subject, "ios:17:iphone");
        assert_eq!(key.fingerprint(), "ios-17-iphone");
        assert!(!key.storage_key()[8 + 36 + 1..].contains("ios:"));
    }

    #[test]
    fn test_subject_pattern_covers_all_fingerprints() {
        let subject = Uuid::new_v4();
        let pattern = SessionKey::subject_pattern(subject);
        assert_eq!(pattern, format!("session:{}:*", subject));
    }

    #[test]
    fn test_token_pair_serialization() {
        let pair = TokenPair::new(
            "access".to_string(),
            "refresh".to_string(),
            3_600,
            31_536_000,
        );
        let json = serde_json::to_string(&pair).unwrap();
        let decoded: TokenPair = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, decoded);
    }
}
