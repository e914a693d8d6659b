//! # Keyport Core
//!
//! Core domain layer for the Keyport authentication service.
//! This crate contains domain entities, the token codec, the session and
//! activation managers, repository/store interfaces, and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
