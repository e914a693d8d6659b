//! # Keyport Infrastructure
//!
//! Concrete implementations of the core collaborator interfaces:
//! - **Cache**: Redis-backed session store (refresh tokens, activation tickets)
//! - **Database**: MySQL user directory via SQLx
//! - **Mail**: HTTP JSON mail dispatch client, plus a logging stub for
//!   development environments without a mail provider

pub mod cache;
pub mod database;
pub mod mail;

pub use cache::{RedisClient, RedisSessionStore};
pub use database::{DatabasePool, MySqlUserRepository};
pub use mail::{HttpMailService, LoggingMailService};

use kp_core::errors::DomainError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis session store error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for the mail provider
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail provider rejected the message
    #[error("Mail dispatch error: {0}")]
    Mail(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Internal {
            message: err.to_string(),
        }
    }
}
