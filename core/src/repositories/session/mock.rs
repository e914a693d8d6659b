//! In-memory implementation of SessionStore for testing

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::{Duration, Instant};

use crate::errors::DomainError;

use super::r#trait::SessionStore;

struct Entry {
    value: String,
    expires_at: Instant,
}

/// Mock session store for testing
///
/// Entries expire against `tokio::time::Instant`, so tests running under
/// `#[tokio::test(start_paused = true)]` can advance the clock with
/// `tokio::time::advance` to exercise TTL behaviour deterministically.
/// Clones share the underlying map, mirroring how connection handles to a
/// real store share state.
#[derive(Clone)]
pub struct MockSessionStore {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
    fail_next: Arc<RwLock<bool>>,
    failing_keys: Arc<RwLock<HashSet<String>>>,
}

impl MockSessionStore {
    /// Create a new empty mock store
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            fail_next: Arc::new(RwLock::new(false)),
            failing_keys: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    /// Make the next store operation fail with an internal error
    pub async fn fail_next_operation(&self) {
        *self.fail_next.write().await = true;
    }

    /// Make every operation touching `key` fail with an internal error.
    /// Unlike `fail_next_operation` this sticks until the store is dropped,
    /// so individual keys can misbehave inside a multi-key sweep.
    pub async fn fail_on_key(&self, key: &str) {
        self.failing_keys.write().await.insert(key.to_string());
    }

    /// Number of live (unexpired) entries
    pub async fn live_len(&self) -> usize {
        let now = Instant::now();
        let entries = self.entries.read().await;
        entries.values().filter(|e| e.expires_at > now).count()
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        let mut fail = self.fail_next.write().await;
        if *fail {
            *fail = false;
            return Err(DomainError::Internal {
                message: "simulated store failure".to_string(),
            });
        }
        Ok(())
    }

    async fn check_key_failure(&self, key: &str) -> Result<(), DomainError> {
        if self.failing_keys.read().await.contains(key) {
            return Err(DomainError::Internal {
                message: format!("simulated store failure for key {}", key),
            });
        }
        Ok(())
    }
}

impl Default for MockSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), DomainError> {
        self.check_failure().await?;
        self.check_key_failure(key).await?;
        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Instant::now() + Duration::from_secs(ttl_seconds),
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.check_failure().await?;
        self.check_key_failure(key).await?;
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .filter(|e| e.expires_at > Instant::now())
            .map(|e| e.value.clone()))
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        self.check_failure().await?;
        self.check_key_failure(key).await?;
        let mut entries = self.entries.write().await;
        let was_live = entries
            .get(key)
            .map(|e| e.expires_at > Instant::now())
            .unwrap_or(false);
        entries.remove(key);
        Ok(was_live)
    }

    async fn keys_matching(&self, pattern: &str) -> Result<Vec<String>, DomainError> {
        self.check_failure().await?;
        let now = Instant::now();
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|(key, entry)| entry.expires_at > now && glob_match(pattern, key))
            .map(|(key, _)| key.clone())
            .collect())
    }
}

/// Minimal glob matcher supporting `*` wildcards, matching the subset of
/// Redis pattern syntax the store interface relies on
fn glob_match(pattern: &str, text: &str) -> bool {
    let parts: Vec<&str> = pattern.split('*').collect();
    if parts.len() == 1 {
        return pattern == text;
    }

    let mut remaining = text;
    for (i, part) in parts.iter().enumerate() {
        if i == 0 {
            match remaining.strip_prefix(part) {
                Some(rest) => remaining = rest,
                None => return false,
            }
        } else if i == parts.len() - 1 {
            if !part.is_empty() && !remaining.ends_with(part) {
                return false;
            }
        } else if let Some(pos) = remaining.find(part) {
            remaining = &remaining[pos + part.len()..];
        } else {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod glob_tests {
    use super::glob_match;

    #[test]
    fn test_exact_match() {
        assert!(glob_match("session:a:b", "session:a:b"));
        assert!(!glob_match("session:a:b", "session:a:c"));
    }

    #[test]
    fn test_trailing_wildcard() {
        assert!(glob_match("session:a:*", "session:a:device-1"));
        assert!(!glob_match("session:a:*", "session:b:device-1"));
    }

    #[test]
    fn test_lone_wildcard() {
        assert!(glob_match("*", "anything"));
    }
}
