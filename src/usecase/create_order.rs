use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::order::{Order, OrderDispatch, OrderNumber, OrderResult};

// ============================================================================
// Create Order
// ============================================================================
//
// Orchestrates: input DTO → new Order (unpaid, timestamps = now) → dispatch.
//
// Creation is fire-and-forget into the asynchronous pipeline: the order is
// NOT written to the store here, and duplicate order numbers are left for
// whichever backend eventually persists it.
//
// ============================================================================

/// Missing fields decode to empty/zero values; only malformed JSON is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateOrderInput {
    #[serde(rename = "Data")]
    pub payload: String,
    #[serde(rename = "OrderId")]
    pub order_number: OrderNumber,
    #[serde(rename = "Status")]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderOutput {
    #[serde(rename = "Data")]
    pub payload: String,
    #[serde(rename = "OrderId")]
    pub order_number: OrderNumber,
    #[serde(rename = "Status")]
    pub status: String,
}

impl From<&Order> for CreateOrderOutput {
    fn from(order: &Order) -> Self {
        Self {
            payload: order.payload.clone(),
            order_number: order.order_number,
            status: order.status.clone(),
        }
    }
}

pub struct CreateOrder {
    dispatch: Arc<dyn OrderDispatch>,
}

impl CreateOrder {
    pub fn new(dispatch: Arc<dyn OrderDispatch>) -> Self {
        Self { dispatch }
    }

    pub async fn execute(&self, input: CreateOrderInput) -> OrderResult<CreateOrderOutput> {
        let order = Order::new(input.payload, input.order_number, input.status);

        tracing::info!(
            order_number = order.order_number,
            dispatch = self.dispatch.backend_name(),
            "Creating order"
        );

        self.dispatch.send(&order).await?;

        Ok(CreateOrderOutput::from(&order))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
