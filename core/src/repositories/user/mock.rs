//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::{User, UserStatus};
use crate::errors::{AuthError, DomainError};

use super::r#trait::UserRepository;

/// Mock user repository for testing. Clones share the underlying map.
#[derive(Clone)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the repository with an existing user
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(AuthError::UserAlreadyExists {
                email: user.email.clone(),
            }
            .into());
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn update_status(&self, id: Uuid, status: UserStatus) -> Result<(), DomainError> {
        let mut users = self.users.write().await;

        match users.get_mut(&id) {
            Some(user) => {
                user.status = status;
                user.updated_at = chrono::Utc::now();
                Ok(())
            }
            None => Err(AuthError::UserNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let repo = MockUserRepository::new();
        let first = User::new("a@x.com".to_string(), "secret1").unwrap();
        let second = User::new("a@x.com".to_string(), "secret2").unwrap();

        repo.create(first).await.unwrap();
        let err = repo.create(second).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Auth(AuthError::UserAlreadyExists { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_status_unknown_user() {
        let repo = MockUserRepository::new();
        let err = repo
            .update_status(Uuid::new_v4(), UserStatus::Active)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_find_by_email() {
        let repo = MockUserRepository::new();
        let user = User::new("a@x.com".to_string(), "secret1").unwrap();
        repo.insert(user.clone()).await;

        let found = repo.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.id, user.id);
        assert!(repo.find_by_email("b@x.com").await.unwrap().is_none());
    }
}
