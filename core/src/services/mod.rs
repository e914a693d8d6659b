//! Business services implementing the token and account lifecycle.

pub mod activation;
pub mod auth;
pub mod mail;
pub mod session;
pub mod token;

// Re-export main service types
pub use activation::ActivationManager;
pub use auth::{AuthService, AuthServiceConfig};
pub use mail::{MailService, MockMailService, OutboundMail};
pub use session::SessionManager;
pub use token::{TokenCodec, TokenCodecConfig};
