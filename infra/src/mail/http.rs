//! HTTP JSON mail dispatch client

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use kp_core::errors::{AuthError, DomainError};
use kp_core::services::mail::{MailService, OutboundMail};
use kp_shared::MailConfig;

use crate::InfrastructureError;

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendResponse {
    id: String,
}

/// Mail service backed by an HTTP JSON provider API
pub struct HttpMailService {
    client: reqwest::Client,
    config: MailConfig,
}

impl HttpMailService {
    /// Create a new client from mail configuration
    pub fn new(config: MailConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    async fn dispatch(&self, mail: &OutboundMail) -> Result<String, InfrastructureError> {
        let request = SendRequest {
            from: &self.config.from_address,
            to: &mail.to,
            subject: &mail.subject,
            html: &mail.html_body,
            text: &mail.text_body,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::Mail(format!(
                "provider returned {}: {}",
                status, body
            )));
        }

        let parsed: SendResponse = response.json().await?;
        Ok(parsed.id)
    }
}

#[async_trait]
impl MailService for HttpMailService {
    async fn send(&self, mail: OutboundMail) -> Result<String, DomainError> {
        debug!(to = mail.to.as_str(), "dispatching mail via HTTP provider");

        match self.dispatch(&mail).await {
            Ok(id) => {
                debug!(message_id = id.as_str(), "mail accepted by provider");
                Ok(id)
            }
            Err(e) => {
                error!(error = %e, "mail dispatch failed");
                Err(AuthError::MailDeliveryFailed.into())
            }
        }
    }
}
