//! Token codec module for JWT management
//!
//! This module handles stateless token operations:
//! - Access and refresh token signing (HS256, separate secrets)
//! - Token verification and claims extraction
//! - Mapping of signature/expiry failures onto domain errors
//!
//! The codec is deliberately pure: it never talks to the session store.
//! Refresh-token persistence and revocation live in the session manager.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenCodecConfig;
pub use service::TokenCodec;
