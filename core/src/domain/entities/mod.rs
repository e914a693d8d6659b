//! Domain entities representing core business objects.

pub mod activation;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use activation::{activation_key, ActivationPurpose, ACTIVATION_TICKET_LENGTH};
pub use token::{Claims, SessionKey, TokenPair};
pub use user::{User, UserStatus};
