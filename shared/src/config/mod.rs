//! Configuration module organized by concern
//!
//! - `auth` - Token signing secrets, lifetimes, and session policy
//! - `cache` - Redis connection settings for the session store
//! - `database` - MySQL connection settings for the user directory
//! - `mail` - Outbound mail dispatch settings
//! - `server` - HTTP server bind settings

pub mod auth;
pub mod cache;
pub mod database;
pub mod mail;
pub mod server;

pub use auth::AuthConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use mail::MailConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Session store (Redis) configuration
    pub cache: CacheConfig,

    /// User directory (MySQL) configuration
    pub database: DatabaseConfig,

    /// Token and session policy configuration
    pub auth: AuthConfig,

    /// Mail dispatch configuration
    pub mail: MailConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cache: CacheConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            mail: MailConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            cache: CacheConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            mail: MailConfig::default(),
        }
    }
}
