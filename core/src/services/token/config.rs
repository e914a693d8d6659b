//! Token codec configuration

use kp_shared::AuthConfig;

/// Configuration for the token codec
#[derive(Debug, Clone)]
pub struct TokenCodecConfig {
    /// Secret for signing and verifying access tokens
    pub access_secret: String,

    /// Secret for signing and verifying refresh tokens.
    /// Distinct from the access secret so one class of token can never
    /// pass verification as the other.
    pub refresh_secret: String,

    /// Issuer written into, and required from, every token
    pub issuer: String,

    /// Access token lifetime in seconds
    pub access_ttl_seconds: u64,

    /// Refresh token lifetime in seconds
    pub refresh_ttl_seconds: u64,
}

impl TokenCodecConfig {
    /// Builds codec configuration from the application auth settings
    pub fn from_auth_config(auth: &AuthConfig) -> Self {
        Self {
            access_secret: auth.access_token_secret.clone(),
            refresh_secret: auth.refresh_token_secret.clone(),
            issuer: auth.issuer.clone(),
            access_ttl_seconds: auth.access_token_ttl_seconds,
            refresh_ttl_seconds: auth.refresh_token_ttl_seconds,
        }
    }
}

impl Default for TokenCodecConfig {
    fn default() -> Self {
        Self {
            access_secret: "dev-access-secret".to_string(),
            refresh_secret: "dev-refresh-secret".to_string(),
            issuer: "keyport".to_string(),
            access_ttl_seconds: 3_600,
            refresh_ttl_seconds: 31_536_000,
        }
    }
}
