use async_trait::async_trait;

use crate::domain::Event;

/// Fire-and-forget domain event emission.
///
/// `publish` has no observable outcome: adapters log failures and never
/// propagate them, so a client-visible response can never depend on
/// delivery. The orchestrator must not retry.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: Event);
}
