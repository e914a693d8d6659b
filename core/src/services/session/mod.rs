//! Session manager module
//!
//! Owns the server-side half of the token lifecycle: persisting refresh
//! tokens in the expiring store, rotating them on refresh, and revoking
//! them on logout (single device or all devices).

mod service;


pub use service::SessionManager;
