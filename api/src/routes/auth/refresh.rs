use actix_web::{web, HttpRequest, HttpResponse};

use kp_core::repositories::{SessionStore, UserRepository};
use kp_core::services::mail::MailService;

use crate::dto::{RefreshTokenRequest, TokenPairResponse};
use crate::handlers::handle_domain_error;

use super::{device_fingerprint, AppState};

/// Handler for POST /api/v1/auth/refresh
///
/// Rotates the session: the presented refresh token must match the one
/// the server holds for this device, and stops working once the new pair
/// is issued.
///
/// # Responses
/// - 200 OK: fresh `{access_token, refresh_token, ...}` pair
/// - 401 Unauthorized: expired, forged, revoked, or superseded token
pub async fn refresh<U, S, M>(
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
        .refresh(&request.refresh_token, &fingerprint)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(TokenPairResponse::from(pair)),
        Err(error) => handle_domain_error(error),
    }
}
