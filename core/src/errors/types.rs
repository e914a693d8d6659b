//! Domain-specific error types for authentication and session management
//!
//! Error variants carry enough structure for the presentation layer to map
//! them onto HTTP statuses; human-readable messages come from the `Display`
//! implementations.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User not found")]
    UserNotFound,

    #[error("{email} is already registered")]
    UserAlreadyExists { email: String },

    #[error("Username/password not valid")]
    InvalidCredentials,

    #[error("Account is not activated")]
    AccountNotActivated,

    #[error("Account suspended")]
    AccountSuspended,

    #[error("Mail delivery failed")]
    MailDeliveryFailed,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Missing required claim: {claim}")]
    MissingClaim { claim: String },
}

/// Activation ticket errors
#[derive(Error, Debug)]
pub enum ActivationError {
    #[error("Activation ticket not found or already used")]
    TicketNotFound,

    #[error("Unknown activation purpose: {purpose}")]
    UnknownPurpose { purpose: String },
}

/// Validation errors for request input, carried as an ordered list of
/// (field, message) pairs
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{0}")]
    Fields(#[from] kp_shared::FieldErrors),
}
