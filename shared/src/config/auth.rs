//! Token and session policy configuration

use serde::{Deserialize, Serialize};

/// Default access token lifetime (1 hour)
const DEFAULT_ACCESS_TTL_SECONDS: u64 = 3_600;

/// Default refresh token lifetime (1 year)
const DEFAULT_REFRESH_TTL_SECONDS: u64 = 31_536_000;

/// Default activation ticket lifetime (15 minutes)
const DEFAULT_ACTIVATION_TTL_SECONDS: u64 = 900;

/// Configuration for token signing and session policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret used to sign access tokens
    pub access_token_secret: String,

    /// Secret used to sign refresh tokens
    pub refresh_token_secret: String,

    /// Issuer claim embedded in every token
    pub issuer: String,

    /// Access token lifetime in seconds
    #[serde(default = "default_access_ttl")]
    pub access_token_ttl_seconds: u64,

    /// Refresh token lifetime in seconds; also the session store TTL
    #[serde(default = "default_refresh_ttl")]
    pub refresh_token_ttl_seconds: u64,

    /// Activation ticket lifetime in seconds
    #[serde(default = "default_activation_ttl")]
    pub activation_ttl_seconds: u64,

    /// Fallback device fingerprint used when a client supplies none.
    /// Host-derived by default; real deployments should send a device id.
    #[serde(default = "default_fingerprint")]
    pub default_device_fingerprint: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_secret: String::from("dev-access-secret-change-in-production"),
            refresh_token_secret: String::from("dev-refresh-secret-change-in-production"),
            issuer: String::from("keyport"),
            access_token_ttl_seconds: default_access_ttl(),
            refresh_token_ttl_seconds: default_refresh_ttl(),
            activation_ttl_seconds: default_activation_ttl(),
            default_device_fingerprint: default_fingerprint(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            access_token_secret: std::env::var("ACCESS_TOKEN_SECRET")
                .unwrap_or(defaults.access_token_secret),
            refresh_token_secret: std::env::var("REFRESH_TOKEN_SECRET")
                .unwrap_or(defaults.refresh_token_secret),
            issuer: std::env::var("TOKEN_ISSUER").unwrap_or(defaults.issuer),
            access_token_ttl_seconds: env_u64(
                "ACCESS_TOKEN_TTL_SECONDS",
                defaults.access_token_ttl_seconds,
            ),
            refresh_token_ttl_seconds: env_u64(
                "REFRESH_TOKEN_TTL_SECONDS",
                defaults.refresh_token_ttl_seconds,
            ),
            activation_ttl_seconds: env_u64(
                "ACTIVATION_TTL_SECONDS",
                defaults.activation_ttl_seconds,
            ),
            default_device_fingerprint: default_fingerprint(),
        }
    }
}

fn env_u64(name: &str, fallback: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}

fn default_access_ttl() -> u64 {
    DEFAULT_ACCESS_TTL_SECONDS
}

fn default_refresh_ttl() -> u64 {
    DEFAULT_REFRESH_TTL_SECONDS
}

fn default_activation_ttl() -> u64 {
    DEFAULT_ACTIVATION_TTL_SECONDS
}

fn default_fingerprint() -> String {
    std::env::var("HOSTNAME").unwrap_or_else(|_| String::from("default"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.issuer, "keyport");
        assert_eq!(config.access_token_ttl_seconds, 3_600);
        assert_eq!(config.refresh_token_ttl_seconds, 31_536_000);
        assert_eq!(config.activation_ttl_seconds, 900);
        assert!(!config.default_device_fingerprint.is_empty());
    }
}
