//! SessionStore adapter over the Redis client

use async_trait::async_trait;

use kp_core::errors::DomainError;
use kp_core::repositories::SessionStore;

use super::redis_client::RedisClient;

/// Redis-backed implementation of the core `SessionStore` trait
///
/// A thin adapter: all connection management and retry behaviour lives in
/// `RedisClient`; this type only translates infrastructure failures into
/// domain errors.
#[derive(Clone)]
pub struct RedisSessionStore {
    client: RedisClient,
}

impl RedisSessionStore {
    /// Wrap an existing Redis client
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Access the underlying client, e.g. for health checks
    pub fn client(&self) -> &RedisClient {
        &self.client
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), DomainError> {
        self.client
            .set_with_expiry(key, value, ttl_seconds)
            .await
            .map_err(DomainError::from)
    }

    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.client.get(key).await.map_err(DomainError::from)
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        self.client.delete(key).await.map_err(DomainError::from)
    }

    async fn keys_matching(&self, pattern: &str) -> Result<Vec<String>, DomainError> {
        self.client
            .keys_matching(pattern)
            .await
            .map_err(DomainError::from)
    }
}
