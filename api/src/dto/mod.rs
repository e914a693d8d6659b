//! Request and response data transfer objects

pub mod auth;
pub mod error;

pub use auth::{
    ActivateQuery, LoginRequest, RefreshTokenRequest, RegisterRequest, TokenPairResponse,
    UserResponse,
};
pub use error::ErrorResponse;
