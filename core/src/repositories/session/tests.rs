//! Tests for the session store contract against the in-memory implementation

use tokio::time::{advance, Duration};

use super::mock::MockSessionStore;
use super::r#trait::SessionStore;

#[tokio::test]
async fn test_put_then_get() {
    let store = MockSessionStore::new();
    store.put("session:u:d", "token", 60).await.unwrap();
    assert_eq!(
        store.get("session:u:d").await.unwrap(),
        Some("token".to_string())
    );
}

#[tokio::test]
async fn test_get_missing_key() {
    let store = MockSessionStore::new();
    assert_eq!(store.get("session:u:d").await.unwrap(), None);
}

#[tokio::test(start_paused = true)]
async fn test_entry_expires_after_ttl() {
    let store = MockSessionStore::new();
    store.put("session:u:d", "token", 60).await.unwrap();

    advance(Duration::from_secs(59)).await;
    assert!(store.get("session:u:d").await.unwrap().is_some());

    advance(Duration::from_secs(2)).await;
    assert_eq!(store.get("session:u:d").await.unwrap(), None);
}

#[tokio::test(start_paused = true)]
async fn test_overwrite_resets_ttl() {
    let store = MockSessionStore::new();
    store.put("session:u:d", "old", 60).await.unwrap();

    advance(Duration::from_secs(50)).await;
    store.put("session:u:d", "new", 60).await.unwrap();

    advance(Duration::from_secs(50)).await;
    assert_eq!(
        store.get("session:u:d").await.unwrap(),
        Some("new".to_string())
    );
}

#[tokio::test]
async fn test_delete_reports_liveness() {
    let store = MockSessionStore::new();
    store.put("session:u:d", "token", 60).await.unwrap();

    assert!(store.delete("session:u:d").await.unwrap());
    assert!(!store.delete("session:u:d").await.unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_delete_expired_entry_is_noop() {
    let store = MockSessionStore::new();
    store.put("session:u:d", "token", 10).await.unwrap();

    advance(Duration::from_secs(11)).await;
    assert!(!store.delete("session:u:d").await.unwrap());
}

#[tokio::test]
async fn test_keys_matching_scopes_by_pattern() {
    let store = MockSessionStore::new();
    store.put("session:alice:phone", "t1", 60).await.unwrap();
    store.put("session:alice:laptop", "t2", 60).await.unwrap();
    store.put("session:bob:phone", "t3", 60).await.unwrap();

    let mut keys = store.keys_matching("session:alice:*").await.unwrap();
    keys.sort();
    assert_eq!(keys, vec!["session:alice:laptop", "session:alice:phone"]);
}

#[tokio::test(start_paused = true)]
async fn test_keys_matching_skips_expired() {
    let store = MockSessionStore::new();
    store.put("session:alice:phone", "t1", 10).await.unwrap();
    store.put("session:alice:laptop", "t2", 120).await.unwrap();

    advance(Duration::from_secs(30)).await;
    let keys = store.keys_matching("session:alice:*").await.unwrap();
    assert_eq!(keys, vec!["session:alice:laptop"]);
}

#[tokio::test]
async fn test_simulated_failure_surfaces_internal_error() {
    let store = MockSessionStore::new();
    store.fail_next_operation().await;
    assert!(store.get("anything").await.is_err());
    // The failure is one-shot
    assert!(store.get("anything").await.is_ok());
}

#[tokio::test]
async fn test_key_scoped_failure_is_sticky_and_scoped() {
    let store = MockSessionStore::new();
    store.put("session:u:good", "t1", 60).await.unwrap();
    store.put("session:u:bad", "t2", 60).await.unwrap();
    store.fail_on_key("session:u:bad").await;

    assert!(store.delete("session:u:bad").await.is_err());
    // Sticky, unlike fail_next_operation
    assert!(store.get("session:u:bad").await.is_err());
    // Other keys are unaffected
    assert!(store.delete("session:u:good").await.unwrap());
}
