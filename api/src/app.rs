//! Application factory
//!
//! Builds the Actix application with its routes, middleware, and shared
//! state. Kept generic over the collaborator implementations so tests can
//! run the full HTTP surface against in-memory stores.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use kp_core::repositories::{SessionStore, UserRepository};
use kp_core::services::mail::MailService;
use kp_core::services::token::TokenCodec;

use crate::dto::ErrorResponse;
use crate::middleware::JwtAuth;
use crate::routes::auth::{
    activate::activate,
    login::login,
    logout::{logout, logout_all},
    refresh::refresh,
    register::register,
    AppState,
};
use crate::routes::user::me;

/// Create and configure the application with all dependencies
pub fn create_app<U, S, M>(
    app_state: web::Data<AppState<U, S, M>>,
    codec: web::Data<TokenCodec>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
    M: MailService + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(codec)
        .wrap(Logger::default())
        // Liveness endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(register::<U, S, M>))
                        .route("/login", web::post().to(login::<U, S, M>))
                        .route("/refresh", web::post().to(refresh::<U, S, M>))
                        .route("/logout", web::delete().to(logout::<U, S, M>))
                        .route("/logout-all", web::delete().to(logout_all::<U, S, M>))
                        .route("/activate/{ticket}", web::get().to(activate::<U, S, M>)),
                )
                .route(
                    "/me",
                    web::get().to(me::<U, S, M>).wrap(JwtAuth::new()),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "keyport-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default handler for unmatched routes
async fn not_found() -> HttpResponse {
    ErrorResponse::new("not_found", "The requested resource does not exist")
        .to_response(actix_web::http::StatusCode::NOT_FOUND)
}
