//! Mail dispatch interface
//!
//! The auth flow only needs to hand a message to a delivery collaborator;
//! how it travels (HTTP relay, SMTP, a logging stub in development) is an
//! infrastructure concern behind this trait.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::DomainError;

/// An outbound email message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

impl OutboundMail {
    /// Builds the activation message pointing at a redeemable ticket URL
    pub fn activation(to: &str, activation_url: &str) -> Self {
        Self {
            to: to.to_string(),
            subject: "Activate your account".to_string(),
            html_body: format!(
                "<p>Welcome! Confirm your email address by visiting \
                 <a href=\"{url}\">{url}</a>. The link expires in 15 minutes.</p>",
                url = activation_url
            ),
            text_body: format!(
                "Welcome! Confirm your email address by visiting {} \
                 (the link expires in 15 minutes).",
                activation_url
            ),
        }
    }
}

/// Service trait for delivering email
#[async_trait]
pub trait MailService: Send + Sync {
    /// Deliver a message, returning a provider message id
    async fn send(&self, mail: OutboundMail) -> Result<String, DomainError>;
}

// Lets callers pick a delivery backend at runtime
#[async_trait]
impl MailService for Box<dyn MailService> {
    async fn send(&self, mail: OutboundMail) -> Result<String, DomainError> {
        (**self).send(mail).await
    }
}

/// Mock mail service for testing that records every message.
/// Clones share the recorded outbox.
#[derive(Clone)]
pub struct MockMailService {
    sent: Arc<RwLock<Vec<OutboundMail>>>,
    fail: Arc<RwLock<bool>>,
}

impl MockMailService {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            fail: Arc::new(RwLock::new(false)),
        }
    }

    /// Make every subsequent send fail
    pub async fn set_failing(&self, failing: bool) {
        *self.fail.write().await = failing;
    }

    /// Messages delivered so far
    pub async fn sent_messages(&self) -> Vec<OutboundMail> {
        self.sent.read().await.clone()
    }
}

impl Default for MockMailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailService for MockMailService {
    async fn send(&self, mail: OutboundMail) -> Result<String, DomainError> {
        if *self.fail.read().await {
            return Err(crate::errors::AuthError::MailDeliveryFailed.into());
        }
        let mut sent = self.sent.write().await;
        sent.push(mail);
        Ok(format!("mock-{}", sent.len()))
    }
}
