//! Error taxonomies shared by the ports.

use thiserror::Error;

/// Persistence failures, as reported by `UserStore` adapters.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user not found")]
    NotFound,

    #[error("user already exists: {0}")]
    Duplicate(String),

    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Authentication failures, as reported by the token service and the
/// request gate.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing token")]
    MissingAuth,

    #[error("invalid token format")]
    InvalidScheme,

    #[error("token expired")]
    Expired,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("token signing failed: {0}")]
    Signing(String),

    #[error("password hashing failed: {0}")]
    Hashing(String),
}
