use actix_web::{web, HttpResponse};

use kp_core::repositories::{SessionStore, UserRepository};
use kp_core::services::mail::MailService;

use crate::dto::ActivateQuery;
use crate::handlers::handle_domain_error;

use super::AppState;

/// Handler for GET /api/v1/auth/activate/{ticket}?purpose=email-verify
///
/// Redeems a one-shot activation ticket and marks the account active.
/// An unrecognized purpose is rejected without consuming the ticket.
///
/// # Responses
/// - 200 OK: `{"activated": "<user id>"}`
/// - 404 Not Found: unknown, expired, or already-used ticket
/// - 422 Unprocessable Entity: unrecognized purpose
pub async fn activate<U, S, M>(
    state: web::Data<AppState<U, S, M>>,
    ticket: web::Path<String>,
    query: web::Query<ActivateQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
    M: MailService + 'static,
{
    match state.auth_service.activate(&ticket, &query.purpose).await {
        Ok(subject) => HttpResponse::Ok().json(serde_json::json!({ "activated": subject })),
        Err(error) => handle_domain_error(error),
    }
}
