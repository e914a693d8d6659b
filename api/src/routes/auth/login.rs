use actix_web::{web, HttpRequest, HttpResponse};

use kp_core::repositories::{SessionStore, UserRepository};
use kp_core::services::mail::MailService;

use crate::dto::{LoginRequest, TokenPairResponse};
use crate::handlers::handle_domain_error;

use super::{device_fingerprint, AppState};

/// Handler for POST /api/v1/auth/login
///
/// Authenticates credentials and opens a session for the device named by
/// the `X-Device-Id` header. A repeat login from the same device replaces
/// its previous session.
///
/// # Responses
/// - 200 OK: `{access_token, refresh_token, token_type, expires_in}`
/// - 401 Unauthorized: bad credentials or inactive account (generic body)
pub async fn login<U, S, M>(
    req: HttpRequest,
    state: web::Data<AppState<U, S, M>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
    M: MailService + 'static,
{
    let fingerprint = device_fingerprint(&req, &state);

    match state
        .auth_service
        .login(&request.email, &request.password, &fingerprint)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(TokenPairResponse::from(pair)),
        Err(error) => handle_domain_error(error),
    }
}
