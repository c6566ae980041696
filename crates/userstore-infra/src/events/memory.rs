//! In-memory event publisher.
//!
//! Records every published event behind a lock. Serves as the fallback
//! when no broker is configured and as the spy that tests assert
//! against.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use userstore_core::domain::Event;
use userstore_core::ports::EventPublisher;

#[derive(Clone, Default)]
pub struct MemoryEventPublisher {
    events: Arc<Mutex<Vec<Event>>>,
}

impl MemoryEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything published so far, in order.
    pub async fn published(&self) -> Vec<Event> {
        self.events.lock().await.clone()
    }
}

#[async_trait]
impl EventPublisher for MemoryEventPublisher {
    async fn publish(&self, event: Event) {
        tracing::debug!(kind = ?event.kind, user_id = %event.user_id, "Event recorded");
        self.events.lock().await.push(event);
    }
}
