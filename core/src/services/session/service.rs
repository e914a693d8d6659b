//! Session manager implementation

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::entities::token::{SessionKey, TokenPair};
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::SessionStore;
use crate::services::token::TokenCodec;

/// Manager for refresh-token sessions
///
/// One session exists per (subject, device fingerprint) pair. The store
/// holds the refresh token verbatim under the session key; a presented
/// refresh token is only honoured when it matches the stored value byte
/// for byte, so rotation invalidates every previously issued token for
/// that device.
pub struct SessionManager<S: SessionStore> {
    store: S,
    codec: Arc<TokenCodec>,
}

impl<S: SessionStore> SessionManager<S> {
    /// Creates a new session manager
    pub fn new(store: S, codec: Arc<TokenCodec>) -> Self {
        Self { store, codec }
    }

    /// Issues a fresh token pair for a subject on a device.
    ///
    /// The refresh token is persisted before the pair is returned, so a
    /// client can never hold a refresh token the server does not track.
    /// Issuing for a device that already has a session supersedes it.
    pub async fn issue(&self, subject: Uuid, fingerprint: &str) -> DomainResult<TokenPair> {
        let pair = self.codec.issue_pair(subject)?;
        let key = SessionKey::new(subject, fingerprint);

        self.store
            .put(
                &key.storage_key(),
                &pair.refresh_token,
                self.codec.refresh_ttl_seconds(),
            )
            .await?;

        debug!(subject = %subject, fingerprint = key.fingerprint(), "session issued");
        Ok(pair)
    }

    /// Rotates a session: verifies the presented refresh token, then
    /// issues and persists a replacement pair.
    ///
    /// The old refresh token stops working the moment the new pair is
    /// stored, because verification compares against the stored value.
    pub async fn refresh(&self, refresh_token: &str, fingerprint: &str) -> DomainResult<TokenPair> {
        let subject = self.verify_refresh(refresh_token, fingerprint).await?;
        self.issue(subject, fingerprint).await
    }

    /// Verifies a refresh token against the store and returns its subject
    ///
    /// A token passes only when its signature verifies AND the store holds
    /// exactly this token under the session key for the given device.
    pub async fn verify_refresh(
        &self,
        refresh_token: &str,
        fingerprint: &str,
    ) -> DomainResult<Uuid> {
        let subject = self.codec.refresh_subject(refresh_token)?;
        let key = SessionKey::new(subject, fingerprint);

        match self.store.get(&key.storage_key()).await? {
            Some(stored) if stored == refresh_token => Ok(subject),
            Some(_) => {
                warn!(subject = %subject, "refresh token superseded by rotation");
                Err(TokenError::InvalidRefreshToken.into())
            }
            None => {
                debug!(subject = %subject, "no live session for refresh token");
                Err(TokenError::TokenRevoked.into())
            }
        }
    }

    /// Ends the session for one device.
    ///
    /// The refresh token must carry a valid signature; beyond that the
    /// operation is idempotent, so logging out an already-ended session
    /// succeeds quietly.
    pub async fn logout(&self, refresh_token: &str, fingerprint: &str) -> DomainResult<()> {
        let subject = self.codec.refresh_subject(refresh_token)?;
        let key = SessionKey::new(subject, fingerprint);

        let removed = self.store.delete(&key.storage_key()).await?;
        debug!(subject = %subject, removed, "session logout");
        Ok(())
    }

    /// Ends every session for the subject named by a refresh token,
    /// across all device fingerprints.
    ///
    /// Deletion failures do not stop the sweep; every remaining key is
    /// still attempted, and the failures are reported together afterwards.
    pub async fn logout_all(&self, refresh_token: &str) -> DomainResult<usize> {
        let subject = self.codec.refresh_subject(refresh_token)?;
        let keys = self
            .store
            .keys_matching(&SessionKey::subject_pattern(subject))
            .await?;

        let mut removed = 0;
        let mut failures: Vec<String> = Vec::new();

        for key in &keys {
            match self.store.delete(key).await {
                Ok(true) => removed += 1,
                Ok(false) => {}
                Err(e) => {
                    warn!(key = key.as_str(), error = %e, "failed to delete session");
                    failures.push(format!("{}: {}", key, e));
                }
            }
        }

        if !failures.is_empty() {
            return Err(DomainError::Internal {
                message: format!(
                    "failed to delete {} of {} sessions: {}",
                    failures.len(),
                    keys.len(),
                    failures.join("; ")
                ),
            });
        }

        debug!(subject = %subject, removed, "all sessions ended");
        Ok(removed)
    }
}
