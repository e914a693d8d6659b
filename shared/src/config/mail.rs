//! Outbound mail dispatch configuration

use serde::{Deserialize, Serialize};

/// Configuration for the HTTP mail dispatch service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Mail provider API endpoint
    pub endpoint: String,

    /// API key for the mail provider
    pub api_key: String,

    /// Sender address used for all outbound mail
    pub from_address: String,

    /// Base URL embedded in activation links
    pub activation_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from("http://localhost:8025/api/send"),
            api_key: String::new(),
            from_address: String::from("no-reply@keyport.local"),
            activation_base_url: String::from("http://localhost:3000/api/v1/auth/activate"),
            request_timeout_secs: default_timeout(),
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            endpoint: std::env::var("MAIL_API_ENDPOINT").unwrap_or(defaults.endpoint),
            api_key: std::env::var("MAIL_API_KEY").unwrap_or(defaults.api_key),
            from_address: std::env::var("MAIL_FROM_ADDRESS").unwrap_or(defaults.from_address),
            activation_base_url: std::env::var("ACTIVATION_BASE_URL")
                .unwrap_or(defaults.activation_base_url),
            request_timeout_secs: std::env::var("MAIL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}

fn default_timeout() -> u64 {
    30
}
