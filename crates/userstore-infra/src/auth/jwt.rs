//! JWT token service implementation.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use userstore_core::error::AuthError;
use userstore_core::ports::{TokenClaims, TokenService};

/// Token service configuration. The secret is injected here once at
/// startup; nothing reads it ambiently afterwards.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours: 24,
        }
    }
}

/// Serialized claim set: the subject and the expiry, nothing else.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    username: String,
    exp: i64,
}

/// HS256-signed bearer tokens with a fixed validity window.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_hours: i64,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            expiration_hours: config.expiration_hours,
        }
    }
}

impl TokenService for JwtTokenService {
    fn create_token(&self, username: &str) -> Result<String, AuthError> {
        let claims = Claims {
            username: username.to_string(),
            exp: (Utc::now() + TimeDelta::hours(self.expiration_hours)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        // HS256 only; tokens signed with any other algorithm are
        // rejected outright.
        let validation = Validation::new(Algorithm::HS256);

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(TokenClaims {
            username: data.claims.username,
            exp: data.claims.exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(secret: &str) -> JwtTokenService {
        JwtTokenService::new(JwtConfig::new(secret))
    }

    #[test]
    fn create_and_validate_round_trips_the_subject() {
        let svc = service("test-secret");
        let token = svc.create_token("jane").unwrap();

        let claims = svc.validate_token(&token).unwrap();
        assert_eq!(claims.username, "jane");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn garbage_token_is_invalid() {
        let err = service("test-secret")
            .validate_token("not-a-token")
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn token_signed_with_a_different_secret_is_rejected() {
        let token = service("secret-one").create_token("jane").unwrap();

        let err = service("secret-two").validate_token(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let svc = JwtTokenService::new(JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: -1,
        });
        let token = svc.create_token("jane").unwrap();

        let err = svc.validate_token(&token).unwrap_err();
        assert!(matches!(err, AuthError::Expired));
    }

    #[test]
    fn non_hs256_token_is_rejected() {
        // Signed with HS512 over the same secret.
        let claims = Claims {
            username: "jane".to_string(),
            exp: (Utc::now() + TimeDelta::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let err = service("test-secret").validate_token(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }
}
