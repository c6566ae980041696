//! Application configuration loaded from environment variables.

use std::env;

use userstore_infra::{JwtConfig, MongoConfig, RabbitConfig};

/// Application configuration. Backends are optional: when one is not
/// configured the server falls back to its in-memory adapter.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub mongo: Option<MongoConfig>,
    pub rabbit: Option<RabbitConfig>,
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mongo = env::var("MONGODB_URI").ok().map(|uri| MongoConfig {
            uri,
            database: env::var("MONGODB_DATABASE").unwrap_or_else(|_| "users".to_string()),
        });

        let rabbit = env::var("AMQP_URI").ok().map(|uri| RabbitConfig {
            uri,
            exchange: env::var("AMQP_EXCHANGE").unwrap_or_else(|_| "user-events".to_string()),
        });

        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set; using a development-only default");
            "change-me-in-production".to_string()
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            mongo,
            rabbit,
            jwt: JwtConfig::new(secret),
        }
    }
}
