//! Domain error to HTTP response mapping
//!
//! All credential and token failures collapse to a single generic 401 body
//! so the response never reveals whether an email exists, a password was
//! wrong, or a token was revoked. The precise cause is logged server-side.

use actix_web::HttpResponse;
use std::collections::HashMap;

use kp_core::errors::{ActivationError, AuthError, DomainError, ValidationError};

use crate::dto::ErrorResponse;

/// Convert a domain error into the appropriate HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    log::error!("Domain error: {:?}", error);

    match error {
        DomainError::Auth(auth_error) => handle_auth_error(auth_error),
        DomainError::Token(_) => {
            // Expiry, bad signatures, revocation, rotation races: all 401
            unauthorized()
        }
        DomainError::Activation(activation_error) => handle_activation_error(activation_error),
        DomainError::ValidationErr(validation_error) => handle_validation_error(validation_error),
        DomainError::Internal { .. } => internal_error(),
    }
}

fn handle_auth_error(error: AuthError) -> HttpResponse {
    match error {
        AuthError::UserAlreadyExists { email } => HttpResponse::Conflict().json(
            ErrorResponse::new("email_taken", format!("{} is already registered", email)),
        ),

        AuthError::UserNotFound => {
            HttpResponse::NotFound().json(ErrorResponse::new("not_found", "User not found"))
        }

        // Deliberately indistinguishable from each other
        AuthError::InvalidCredentials
        | AuthError::AccountNotActivated
        | AuthError::AccountSuspended => unauthorized(),

        AuthError::MailDeliveryFailed => internal_error(),
    }
}

fn handle_activation_error(error: ActivationError) -> HttpResponse {
    match error {
        ActivationError::TicketNotFound => HttpResponse::NotFound().json(ErrorResponse::new(
            "ticket_not_found",
            "Activation ticket not found or already used",
        )),

        ActivationError::UnknownPurpose { purpose } => HttpResponse::UnprocessableEntity().json(
            ErrorResponse::new("unknown_purpose", format!("Unknown purpose: {}", purpose)),
        ),
    }
}

fn handle_validation_error(error: ValidationError) -> HttpResponse {
    let ValidationError::Fields(fields) = &error;

    let mut details = HashMap::new();
    details.insert(
        "fields".to_string(),
        serde_json::to_value(&fields.0).unwrap_or_default(),
    );

    HttpResponse::UnprocessableEntity()
        .json(ErrorResponse::new("validation_failed", error.to_string()).with_details(details))
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::new("unauthorized", "Unauthorized"))
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse::new(
        "internal_error",
        "An internal error occurred",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use kp_core::errors::TokenError;

    #[test]
    fn test_credential_failures_collapse_to_401() {
        for error in [
            AuthError::InvalidCredentials,
            AuthError::AccountNotActivated,
            AuthError::AccountSuspended,
        ] {
            let response = handle_domain_error(error.into());
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_token_errors_collapse_to_401() {
        for error in [
            TokenError::TokenExpired,
            TokenError::InvalidSignature,
            TokenError::TokenRevoked,
            TokenError::InvalidRefreshToken,
        ] {
            let response = handle_domain_error(error.into());
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_duplicate_email_maps_to_409() {
        let response = handle_domain_error(
            AuthError::UserAlreadyExists {
                email: "a@x.com".to_string(),
            }
            .into(),
        );
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_field_validation_maps_to_422() {
        let mut fields = kp_shared::FieldErrors::new();
        fields.add("email", "Email can not be empty");
        let response = handle_domain_error(ValidationError::Fields(fields).into());
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_spent_ticket_maps_to_404() {
        let response = handle_domain_error(ActivationError::TicketNotFound.into());
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_body_is_generic() {
        let response = handle_domain_error(DomainError::Internal {
            message: "redis connection refused at 10.0.0.5".to_string(),
        });
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
