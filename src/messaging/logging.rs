use async_trait::async_trait;

use crate::domain::order::{Order, OrderDispatch, OrderResult};

/// Development dispatch: serializes the order exactly like the queue backend
/// would, logs the body and drops it.
#[derive(Default)]
pub struct LoggingOrderDispatch;

impl LoggingOrderDispatch {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OrderDispatch for LoggingOrderDispatch {
    async fn send(&self, order: &Order) -> OrderResult<()> {
        let body = order.to_wire().inspect_err(|e| {
            tracing::error!(error = %e, order_number = order.order_number, "Failed to serialize order");
        })?;

        tracing::info!(
            order_number = order.order_number,
            body = %body,
            "Simulated order dispatch"
        );

        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "logging"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_succeeds() {
        let dispatch = LoggingOrderDispatch::new();
        let order = Order::new("21/06/2025", 78910, "Processing");

        assert!(dispatch.send(&order).await.is_ok());
        assert_eq!(dispatch.backend_name(), "logging");
    }
}
