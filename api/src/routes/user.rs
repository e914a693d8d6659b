//! Routes for the authenticated user

use actix_web::{web, HttpResponse};

use kp_core::repositories::{SessionStore, UserRepository};
use kp_core::services::mail::MailService;

use crate::dto::UserResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;

use super::auth::AppState;

/// Handler for GET /api/v1/me
///
/// Returns the public view of the account named by the presented access
/// token. Guarded by the bearer-token middleware; the token alone
/// authenticates the request (no store lookup).
pub async fn me<U, S, M>(
    state: web::Data<AppState<U, S, M>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
    M: MailService + 'static,
{
    match state.auth_service.find_user(auth.user_id).await {
        Ok(Some(user)) => HttpResponse::Ok().json(UserResponse::from(user)),
        Ok(None) => handle_domain_error(kp_core::errors::AuthError::UserNotFound.into()),
        Err(error) => handle_domain_error(error),
    }
}
