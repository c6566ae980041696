//! Application state - shared across all handlers.

use std::sync::Arc;

use userstore_core::ports::{EventPublisher, PasswordHasher, TokenService, UserStore};
use userstore_infra::{
    Argon2PasswordHasher, JwtTokenService, MemoryEventPublisher, MemoryUserStore, MongoUserStore,
    RabbitEventPublisher,
};

use crate::config::AppConfig;

/// Shared application state. Every collaborator is injected here once
/// at startup; handlers hold no other state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub events: Arc<dyn EventPublisher>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordHasher>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let users: Arc<dyn UserStore> = match &config.mongo {
            Some(mongo) => match MongoUserStore::connect(mongo).await {
                Ok(store) => Arc::new(store),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to MongoDB: {}. Using in-memory fallback.",
                        e
                    );
                    Arc::new(MemoryUserStore::new())
                }
            },
            None => {
                tracing::warn!("MONGODB_URI not set. Running with the in-memory store.");
                Arc::new(MemoryUserStore::new())
            }
        };

        let events: Arc<dyn EventPublisher> = match &config.rabbit {
            Some(rabbit) => match RabbitEventPublisher::connect(rabbit).await {
                Ok(publisher) => Arc::new(publisher),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to RabbitMQ: {}. Events stay in-process.",
                        e
                    );
                    Arc::new(MemoryEventPublisher::new())
                }
            },
            None => {
                tracing::warn!("AMQP_URI not set. Events stay in-process.");
                Arc::new(MemoryEventPublisher::new())
            }
        };

        tracing::info!("Application state initialized");

        Self {
            users,
            events,
            tokens: Arc::new(JwtTokenService::new(config.jwt.clone())),
            passwords: Arc::new(Argon2PasswordHasher::new()),
        }
    }
}
