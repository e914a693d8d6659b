//! Logging mail stub for development

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

use kp_core::errors::DomainError;
use kp_core::services::mail::{MailService, OutboundMail};

/// Mail service that logs messages instead of delivering them.
///
/// Used when no mail provider is configured, so the rest of the flow
/// (activation links included) stays exercisable locally.
#[derive(Default)]
pub struct LoggingMailService {
    counter: AtomicU64,
}

impl LoggingMailService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MailService for LoggingMailService {
    async fn send(&self, mail: OutboundMail) -> Result<String, DomainError> {
        let id = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        info!(
            to = mail.to.as_str(),
            subject = mail.subject.as_str(),
            body = mail.text_body.as_str(),
            "mail (logging stub, not delivered)"
        );
        Ok(format!("log-{}", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_logging_service_returns_sequential_ids() {
        let service = LoggingMailService::new();
        let mail = OutboundMail::activation("a@x.com", "http://localhost/activate/t");

        assert_eq!(service.send(mail.clone()).await.unwrap(), "log-1");
        assert_eq!(service.send(mail).await.unwrap(), "log-2");
    }
}
