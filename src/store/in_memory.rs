use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::domain::order::{Order, OrderError, OrderNumber, OrderResult, OrderStore};

// ============================================================================
// In-Memory Order Store
// ============================================================================
//
// A single mutex guards the whole map and is held for the full duration of
// every operation. Saving an existing order number overwrites it (last write
// wins). Reads hand out clones, never references into the map.
//
// ============================================================================

#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: Mutex<HashMap<OrderNumber, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn save(&self, order: &Order) -> OrderResult<()> {
        let mut orders = self.orders.lock().await;
        let replaced = orders.insert(order.order_number, order.clone()).is_some();

        tracing::debug!(
            order_number = order.order_number,
            replaced,
            "Saved order in memory"
        );

        Ok(())
    }

    async fn get_by_order_number(&self, order_number: OrderNumber) -> OrderResult<Order> {
        let orders = self.orders.lock().await;
        orders
            .get(&order_number)
            .cloned()
            .ok_or(OrderError::NotFound(order_number))
    }

    async fn get_all(&self) -> OrderResult<Vec<Order>> {
        let orders = self.orders.lock().await;
        Ok(orders.values().cloned().collect())
    }

    fn backend_name(&self) -> &'static str {
        "in-memory"
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
