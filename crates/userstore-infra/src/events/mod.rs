//! Event publisher adapters.

mod memory;
mod rabbit;

pub use memory::MemoryEventPublisher;
pub use rabbit::{RabbitConfig, RabbitEventPublisher};
