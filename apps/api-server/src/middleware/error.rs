//! Error mapping - every failure surfaces as `{"error": "<text>"}`.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

use userstore_core::error::AuthError;

/// Application-level error type that handlers map port failures into.
/// The status taxonomy is fixed per operation; see the handler modules.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg)
            | AppError::Unauthorized(msg)
            | AppError::NotFound(msg)
            | AppError::Internal(msg) => f.write_str(msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal(msg) = self {
            tracing::error!("Internal error: {}", msg);
        }

        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let msg = match err {
            AuthError::MissingAuth => "missing token",
            AuthError::InvalidScheme => "invalid token format",
            AuthError::Expired | AuthError::InvalidToken(_) => "invalid token",
            AuthError::Signing(_) | AuthError::Hashing(_) => {
                return AppError::Internal(err.to_string());
            }
        };
        AppError::Unauthorized(msg.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
