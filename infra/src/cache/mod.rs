//! Redis-backed session store
//!
//! `RedisClient` owns the connection plumbing (multiplexed connection,
//! bounded retry with backoff, health check); `RedisSessionStore` adapts
//! it to the `SessionStore` trait from the core crate.

pub mod redis_client;
pub mod session_store;

pub use redis_client::RedisClient;
pub use session_store::RedisSessionStore;
