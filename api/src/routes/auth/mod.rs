//! Authentication route handlers
//!
//! Endpoints for the account and session lifecycle:
//! - Registration and email-ticket activation
//! - Login and refresh-token rotation
//! - Logout for one device or all devices

pub mod activate;
pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;

use actix_web::HttpRequest;
use std::sync::Arc;

use kp_core::repositories::{SessionStore, UserRepository};
use kp_core::services::auth::AuthService;
use kp_core::services::mail::MailService;

/// Header a client uses to name the device a session belongs to
pub const DEVICE_ID_HEADER: &str = "X-Device-Id";

/// Shared application state injected into handlers
pub struct AppState<U, S, M>
where
    U: UserRepository,
    S: SessionStore,
    M: MailService,
{
    pub auth_service: Arc<AuthService<U, S, M>>,
    /// Fingerprint assumed for clients that send no device header
    pub default_fingerprint: String,
}

/// Resolve the device fingerprint for a request.
///
/// Taken from the `X-Device-Id` header when present; otherwise the
/// configured default, so header-less clients still get a working (if
/// shared) session slot.
pub fn device_fingerprint<U, S, M>(req: &HttpRequest, state: &AppState<U, S, M>) -> String
where
    U: UserRepository,
    S: SessionStore,
    M: MailService,
{
    req.headers()
        .get(DEVICE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .unwrap_or_else(|| state.default_fingerprint.clone())
}
