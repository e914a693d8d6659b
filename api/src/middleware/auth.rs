//! Bearer-token authentication middleware for protected endpoints.
//!
//! Extracts the access token from the Authorization header, verifies it
//! through the shared token codec, and injects the subject's identity into
//! the request. Verification is stateless: no store lookup happens here,
//! so a revoked session only locks out refresh, not in-flight access
//! tokens (they lapse within the hour on their own).

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use uuid::Uuid;

use kp_core::services::token::TokenCodec;

/// Authenticated subject identity injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Subject (user) id from the verified access token
    pub user_id: Uuid,
}

/// Bearer-token authentication middleware factory
#[derive(Default)]
pub struct JwtAuth;

impl JwtAuth {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Bearer-token authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => return Err(ErrorUnauthorized("Unauthorized")),
            };

            let codec = req
                .app_data::<web::Data<TokenCodec>>()
                .ok_or_else(|| ErrorUnauthorized("Unauthorized"))?;

            let context = match codec.decode_access(&token) {
                Ok(claims) => match claims.subject_id() {
                    Ok(user_id) => AuthContext { user_id },
                    Err(_) => {
                        log::warn!("access token carried a malformed subject id");
                        return Err(ErrorUnauthorized("Unauthorized"));
                    }
                },
                Err(e) => {
                    log::debug!("access token rejected: {}", e);
                    return Err(ErrorUnauthorized("Unauthorized"));
                }
            };

            req.extensions_mut().insert(context);
            service.call(req).await
        })
    }
}

/// Extracts the Bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ErrorUnauthorized("Unauthorized"));

        ready(result)
    }
}
