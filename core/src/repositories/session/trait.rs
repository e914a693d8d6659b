//! Session store trait defining the interface for expiring key-value state.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Store trait for session state with per-entry time-to-live
///
/// This trait defines the contract for the expiring key-value store that
/// backs refresh-token sessions and activation tickets. Implementations
/// must expire entries no later than their TTL and must never return an
/// expired value.
///
/// # Consistency
/// - A `put` for an existing key replaces both the value and the TTL
/// - `get` after expiry behaves exactly like `get` for a missing key
/// - `delete` reports whether an entry was actually removed, so callers
///   can distinguish revocation from a no-op
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a value under a key, expiring after `ttl_seconds`
    ///
    /// Overwrites any existing entry for the key, resetting its TTL.
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), DomainError>;

    /// Fetch the value stored under a key
    ///
    /// # Returns
    /// * `Ok(Some(value))` - Entry exists and has not expired
    /// * `Ok(None)` - No entry, or the entry has expired
    /// * `Err(DomainError)` - Store unreachable or protocol failure
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Remove the entry stored under a key
    ///
    /// # Returns
    /// * `Ok(true)` - An entry was removed
    /// * `Ok(false)` - No live entry existed for the key
    async fn delete(&self, key: &str) -> Result<bool, DomainError>;

    /// List every live key matching a glob-style pattern
    ///
    /// Used to enumerate all sessions belonging to one subject. The
    /// pattern syntax follows Redis `KEYS`/`SCAN` globs (`*` matches any
    /// run of characters).
    async fn keys_matching(&self, pattern: &str) -> Result<Vec<String>, DomainError>;
}
