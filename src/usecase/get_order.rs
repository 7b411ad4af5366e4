use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::order::{Order, OrderNumber, OrderResult, OrderStore};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GetOrderInput {
    #[serde(rename = "orderId")]
    pub order_number: OrderNumber,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetOrderOutput {
    #[serde(rename = "Data")]
    pub payload: String,
    #[serde(rename = "OrderId")]
    pub order_number: OrderNumber,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Paid")]
    pub paid: bool,
}

impl From<Order> for GetOrderOutput {
    fn from(order: Order) -> Self {
        Self {
            payload: order.payload,
            order_number: order.order_number,
            status: order.status,
            paid: order.paid,
        }
    }
}

/// Looks an order up by number. `NotFound` is passed through untouched so the
/// boundary can turn it into a 404.
pub struct GetOrder {
    store: Arc<dyn OrderStore>,
}

impl GetOrder {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, input: GetOrderInput) -> OrderResult<GetOrderOutput> {
        tracing::debug!(
            order_number = input.order_number,
            store = self.store.backend_name(),
            "Fetching order"
        );

        let order = self
            .store
            .get_by_order_number(input.order_number)
            .await
            .inspect_err(|e| {
                if e.is_not_found() {
                    tracing::debug!(order_number = input.order_number, "Order not found");
                }
            })?;
        Ok(GetOrderOutput::from(order))
    }
}
