//! Authentication ports.

use crate::error::AuthError;

/// Claims carried by a bearer token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub username: String,
    /// Expiry as a unix timestamp.
    pub exp: i64,
}

/// Issues and verifies signed bearer tokens. Verification is stateless
/// pure computation; no server-side session state exists.
pub trait TokenService: Send + Sync {
    /// Sign a token for the subject, valid for a fixed window from now.
    /// Fails only on signing-key failure.
    fn create_token(&self, username: &str) -> Result<String, AuthError>;

    /// Verify signature, algorithm, and expiry, and decode the claims.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Salted password hashing.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}
