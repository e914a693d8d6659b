//! User repository trait defining the interface for account persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::{User, UserStatus};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Email uniqueness is enforced at this boundary: `create` must fail with
/// `AuthError::UserAlreadyExists` when the email is already registered.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user account
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Find a user by their unique id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Update the status of an existing account
    ///
    /// Returns `AuthError::UserNotFound` when no account has the given id.
    async fn update_status(&self, id: Uuid, status: UserStatus) -> Result<(), DomainError>;
}
