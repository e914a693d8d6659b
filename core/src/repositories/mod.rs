//! Repository and store interfaces for persistence operations.

pub mod session;
pub mod user;

// Re-export traits and mocks
pub use session::{MockSessionStore, SessionStore};
pub use user::{MockUserRepository, UserRepository};
