//! Auth orchestration module
//!
//! Ties the user directory, token codec, session manager, activation
//! manager, and mail dispatch together into the flows the HTTP surface
//! exposes: register, login, refresh, logout, logout-all, activate.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
