//! Activation ticket manager implementation

use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::activation::{
    activation_key, ActivationPurpose, ACTIVATION_TICKET_LENGTH,
};
use crate::errors::{ActivationError, DomainError, DomainResult};
use crate::repositories::SessionStore;

/// Manager for one-shot activation tickets
pub struct ActivationManager<S: SessionStore> {
    store: S,
    ttl_seconds: u64,
}

impl<S: SessionStore> ActivationManager<S> {
    /// Creates a new activation manager with the given ticket lifetime
    pub fn new(store: S, ttl_seconds: u64) -> Self {
        Self { store, ttl_seconds }
    }

    /// Mints a fresh ticket for a subject and stores it with the
    /// configured TTL
    pub async fn create_ticket(&self, subject: Uuid) -> DomainResult<String> {
        let ticket: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(ACTIVATION_TICKET_LENGTH)
            .map(char::from)
            .collect();

        self.store
            .put(
                &activation_key(&ticket),
                &subject.to_string(),
                self.ttl_seconds,
            )
            .await?;

        debug!(subject = %subject, "activation ticket created");
        Ok(ticket)
    }

    /// Redeems a ticket for the stated purpose, returning the subject it
    /// was minted for.
    ///
    /// The purpose is checked before the store is touched, so redemption
    /// with an unknown purpose leaves the ticket intact and redeemable.
    /// A recognized redemption consumes the ticket: the entry is removed
    /// before the subject is returned, and losing the removal race to a
    /// concurrent redeemer counts as the ticket not being found.
    pub async fn redeem(&self, ticket: &str, purpose: &str) -> DomainResult<Uuid> {
        let purpose: ActivationPurpose =
            purpose
                .parse()
                .map_err(|e: crate::domain::entities::activation::UnknownPurpose| {
                    ActivationError::UnknownPurpose { purpose: e.0 }
                })?;

        let key = activation_key(ticket);
        let subject = match self.store.get(&key).await? {
            Some(value) => Uuid::parse_str(&value).map_err(|_| DomainError::Internal {
                message: format!("activation entry holds a malformed subject id: {}", value),
            })?,
            None => return Err(ActivationError::TicketNotFound.into()),
        };

        if !self.store.delete(&key).await? {
            // Someone else consumed the ticket between our get and delete
            return Err(ActivationError::TicketNotFound.into());
        }

        debug!(subject = %subject, %purpose, "activation ticket redeemed");
        Ok(subject)
    }
}
