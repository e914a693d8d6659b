//! Shared configuration and utilities for the Keyport server
//!
//! This crate provides functionality used across all server modules:
//! - Environment-driven configuration types
//! - Input validation helpers with field-level error reporting

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, CacheConfig, DatabaseConfig, MailConfig, ServerConfig};
pub use utils::validation::{is_valid_email, validate_credentials, FieldError, FieldErrors};
