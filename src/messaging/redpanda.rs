use async_trait::async_trait;
use rdkafka::{
    config::ClientConfig,
    producer::{FutureProducer, FutureRecord},
};
use std::time::Duration;

use crate::config::KafkaConfig;
use crate::domain::order::{Order, OrderDispatch, OrderError, OrderResult};

// ============================================================================
// Redpanda / Kafka Order Dispatch
// ============================================================================
//
// Publishes each order as a JSON message to one topic, keyed by the order
// number so all messages for an order land on the same partition. One send
// attempt per call; a rejected or timed-out delivery is returned as
// `OrderError::Transport`.
//
// ============================================================================

pub struct RedpandaOrderDispatch {
    producer: FutureProducer,
    topic: String,
    send_timeout: Duration,
}

impl RedpandaOrderDispatch {
    pub fn new(config: &KafkaConfig) -> OrderResult<Self> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", &config.brokers)
            .set("message.timeout.ms", config.message_timeout_ms.to_string())
            .create()
            .map_err(|e| OrderError::Transport(format!("failed to create producer: {}", e)))?;

        tracing::info!(
            brokers = %config.brokers,
            topic = %config.topic,
            "Redpanda producer created"
        );

        Ok(Self {
            producer,
            topic: config.topic.clone(),
            send_timeout: Duration::from_millis(config.message_timeout_ms),
        })
    }
}

#[async_trait]
impl OrderDispatch for RedpandaOrderDispatch {
    async fn send(&self, order: &Order) -> OrderResult<()> {
        let payload = order.to_wire()?;
        let key = order.order_number.to_string();

        let record = FutureRecord::to(&self.topic).key(&key).payload(&payload);

        match self
            .producer
            .send(record, rdkafka::util::Timeout::After(self.send_timeout))
            .await
        {
            Ok(_) => {
                tracing::info!(
                    topic = %self.topic,
                    order_number = order.order_number,
                    "Published order to Redpanda"
                );
                Ok(())
            }
            Err((e, _)) => {
                tracing::error!(
                    error = %e,
                    topic = %self.topic,
                    order_number = order.order_number,
                    "Failed to publish order to Redpanda"
                );
                Err(OrderError::Transport(format!("kafka send error: {}", e)))
            }
        }
    }

    fn backend_name(&self) -> &'static str {
        "redpanda"
    }
}
