use actix_web::{web, HttpResponse};

use kp_core::repositories::{SessionStore, UserRepository};
use kp_core::services::mail::MailService;

use crate::dto::{RegisterRequest, UserResponse};
use crate::handlers::handle_domain_error;

use super::AppState;

/// Handler for POST /api/v1/auth/register
///
/// Creates a not-yet-active account and emails an activation ticket.
///
/// # Responses
/// - 201 Created: public user view (no credential material)
/// - 409 Conflict: email already registered
/// - 422 Unprocessable Entity: field validation failures
pub async fn register<U, S, M>(
    state: web::Data<AppState<U, S, M>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
    M: MailService + 'static,
{
    match state
        .auth_service
        .register(&request.email, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}
