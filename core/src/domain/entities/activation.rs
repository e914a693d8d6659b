//! Activation ticket entities.
//!
//! An activation ticket is an opaque one-shot credential handed to a newly
//! registered user out of band (by mail). Redeeming it flips the account to
//! active; a ticket can only ever be redeemed once.

use std::fmt;
use std::str::FromStr;

/// Length of a generated activation ticket in characters
pub const ACTIVATION_TICKET_LENGTH: usize = 32;

/// Namespace prefix for activation tickets in the backing store
pub const ACTIVATION_KEY_PREFIX: &str = "activation";

/// The storage key under which an activation ticket is persisted:
/// `activation:<ticket>`
pub fn activation_key(ticket: &str) -> String {
    format!("{}:{}", ACTIVATION_KEY_PREFIX, ticket)
}

/// Purpose a caller states when redeeming an activation ticket.
///
/// Redemption with an unrecognized purpose is rejected before the ticket
/// is touched, so the ticket stays redeemable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationPurpose {
    /// Confirming ownership of the registered email address
    EmailVerify,
}

impl ActivationPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmailVerify => "email-verify",
        }
    }
}

impl FromStr for ActivationPurpose {
    type Err = UnknownPurpose;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email-verify" => Ok(Self::EmailVerify),
            other => Err(UnknownPurpose(other.to_string())),
        }
    }
}

impl fmt::Display for ActivationPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a redemption purpose is not recognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPurpose(pub String);

impl fmt::Display for UnknownPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown activation purpose: {}", self.0)
    }
}

impl std::error::Error for UnknownPurpose {}
