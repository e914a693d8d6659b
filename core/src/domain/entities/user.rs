//! User entity and account status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Cost factor for bcrypt password hashing
const BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

/// Account status lifecycle.
///
/// A user starts `NotActive` and becomes `Active` once their activation
/// ticket is redeemed. Only active accounts may log in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    NotActive,
    Active,
    Banned,
    Deleted,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotActive => "not_active",
            Self::Active => "active",
            Self::Banned => "banned",
            Self::Deleted => "deleted",
        }
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_active" => Ok(Self::NotActive),
            "active" => Ok(Self::Active),
            "banned" => Ok(Self::Banned),
            "deleted" => Ok(Self::Deleted),
            other => Err(format!("unknown user status: {}", other)),
        }
    }
}

/// User account registered with the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,

    /// Email address, unique across accounts
    pub email: String,

    /// Bcrypt hash of the password; never the plaintext
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Account status
    pub status: UserStatus,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, not-yet-activated user with a hashed password
    pub fn new(email: String, password: &str) -> Result<Self, bcrypt::BcryptError> {
        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4(),
            email,
            password_hash: Self::hash_password(password)?,
            status: UserStatus::NotActive,
            created_at: now,
            updated_at: now,
        })
    }

    /// Hashes a plaintext password with bcrypt
    pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
        bcrypt::hash(password, BCRYPT_COST)
    }

    /// Verifies a plaintext password against the stored hash
    pub fn verify_password(&self, password: &str) -> Result<bool, bcrypt::BcryptError> {
        bcrypt::verify(password, &self.password_hash)
    }

    /// Whether the account has completed activation and is allowed to log in
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Marks the account as activated
    pub fn activate(&mut self) {
        self.status = UserStatus::Active;
        self.updated_at = Utc::now();
    }
}
