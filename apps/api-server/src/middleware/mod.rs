//! Request middleware: the authentication gate and error mapping.

pub mod auth;
pub mod error;

pub use auth::AuthGate;
pub use error::AppError;
