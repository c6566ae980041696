//! User store adapters.

mod document;
mod memory;
mod mongo;

pub use memory::MemoryUserStore;
pub use mongo::{MongoConfig, MongoUserStore};
