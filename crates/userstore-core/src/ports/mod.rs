//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod events;
mod store;

pub use auth::{PasswordHasher, TokenClaims, TokenService};
pub use events::EventPublisher;
pub use store::UserStore;
