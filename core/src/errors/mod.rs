//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{ActivationError, AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Activation(#[from] ActivationError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Creates an internal error from any displayable cause
    pub fn internal(message: impl std::fmt::Display) -> Self {
        Self::Internal {
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_converts_to_domain_error() {
        let err: DomainError = TokenError::TokenExpired.into();
        assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
    }

    #[test]
    fn test_transparent_display() {
        let err: DomainError = AuthError::InvalidCredentials.into();
        assert_eq!(err.to_string(), "Username/password not valid");
    }

    #[test]
    fn test_internal_helper() {
        let err = DomainError::internal("store unreachable");
        assert_eq!(err.to_string(), "Internal error: store unreachable");
    }
}
