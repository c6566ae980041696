//! RabbitMQ event publisher adapter.
//!
//! Publishes domain events as JSON to a durable fanout exchange. Every
//! failure is logged and swallowed here: publish is fire-and-forget and
//! the caller's response must never depend on delivery.

use async_trait::async_trait;
use lapin::options::{BasicPublishOptions, ExchangeDeclareOptions};
use lapin::types::FieldTable;
use lapin::{BasicProperties, Channel, Connection, ConnectionProperties, ExchangeKind};

use userstore_core::domain::Event;
use userstore_core::ports::EventPublisher;

/// RabbitMQ connection settings.
#[derive(Debug, Clone)]
pub struct RabbitConfig {
    pub uri: String,
    pub exchange: String,
}

/// `EventPublisher` backed by an AMQP fanout exchange.
pub struct RabbitEventPublisher {
    // Held so the connection outlives the channel.
    _connection: Connection,
    channel: Channel,
    exchange: String,
}

impl RabbitEventPublisher {
    /// Connect, open a channel, and declare the exchange.
    pub async fn connect(config: &RabbitConfig) -> Result<Self, lapin::Error> {
        tracing::info!(exchange = %config.exchange, "Connecting to RabbitMQ");

        let connection =
            Connection::connect(&config.uri, ConnectionProperties::default()).await?;
        let channel = connection.create_channel().await?;

        channel
            .exchange_declare(
                &config.exchange,
                ExchangeKind::Fanout,
                ExchangeDeclareOptions {
                    durable: true,
                    ..Default::default()
                },
                FieldTable::default(),
            )
            .await?;

        tracing::info!(exchange = %config.exchange, "RabbitMQ exchange declared");

        Ok(Self {
            _connection: connection,
            channel,
            exchange: config.exchange.clone(),
        })
    }
}

#[async_trait]
impl EventPublisher for RabbitEventPublisher {
    async fn publish(&self, event: Event) {
        let body = match serde_json::to_vec(&event) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize event");
                return;
            }
        };

        // The returned confirmation is dropped on purpose: delivery
        // outcome is not awaited.
        match self
            .channel
            .basic_publish(
                &self.exchange,
                "",
                BasicPublishOptions::default(),
                &body,
                BasicProperties::default().with_content_type("application/json".into()),
            )
            .await
        {
            Ok(_confirm) => {
                tracing::debug!(kind = ?event.kind, user_id = %event.user_id, "Event published");
            }
            Err(e) => {
                tracing::error!(error = %e, kind = ?event.kind, "Failed to publish event");
            }
        }
    }
}
