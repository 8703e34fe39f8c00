use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Username unknown or password mismatch.
    ///
    /// Both cases share one variant so responses never reveal which accounts exist.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Argon2 failed to hash a password or parse a stored hash.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Signing the session token failed.
    #[error("Failed to issue token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid credentials"
/// - hashing and token failures → 500 Internal Server Error with a generic message
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Invalid credentials")),
            )
                .into_response(),
            err => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}
