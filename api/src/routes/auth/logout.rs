use actix_web::{web, HttpRequest, HttpResponse};

use kp_core::repositories::{SessionStore, UserRepository};
use kp_core::services::mail::MailService;

use crate::dto::RefreshTokenRequest;
use crate::handlers::handle_domain_error;

use super::{device_fingerprint, AppState};

/// Handler for DELETE /api/v1/auth/logout
///
/// Ends the session for this device. Idempotent: logging out an already
/// ended session still returns 204, but the token must carry a valid
/// signature.
///
/// # Responses
/// - 204 No Content
/// - 401 Unauthorized: forged or expired refresh token
pub async fn logout<U, S, M>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, M>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
    M: MailService + 'static,
{
    let fingerprint = device_fingerprint(&req, &state);

    match state
        .auth_service
        .logout(&request.refresh_token, &fingerprint)
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/auth/logout-all
///
/// Ends every session belonging to the token's subject, across all
/// devices. Partial deletion failures surface as 500 rather than being
/// silently dropped.
///
/// # Responses
/// - 204 No Content
/// - 401 Unauthorized: forged or expired refresh token
/// - 500 Internal Server Error: one or more sessions could not be removed
pub async fn logout_all<U, S, M>(
    state: web::Data<AppState<U, S, M>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
    M: MailService + 'static,
{
    match state.auth_service.logout_all(&request.refresh_token).await {
        Ok(removed) => {
            log::info!("logout-all removed {} sessions", removed);
            HttpResponse::NoContent().finish()
        }
        Err(error) => handle_domain_error(error),
    }
}
