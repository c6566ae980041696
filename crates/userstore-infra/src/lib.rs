//! # Userstore Infrastructure
//!
//! Concrete implementations of the ports defined in `userstore-core`:
//! the MongoDB user store, the RabbitMQ event publisher, the JWT token
//! service, the Argon2 password hasher, and in-memory counterparts for
//! the store and publisher used by tests and as fallbacks when no
//! backend is configured.

pub mod auth;
pub mod events;
pub mod store;

pub use auth::{Argon2PasswordHasher, JwtConfig, JwtTokenService};
pub use events::{MemoryEventPublisher, RabbitConfig, RabbitEventPublisher};
pub use store::{MemoryUserStore, MongoConfig, MongoUserStore};
