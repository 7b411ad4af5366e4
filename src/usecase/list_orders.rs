use std::sync::Arc;

use crate::domain::order::{Order, OrderResult, OrderStore};

/// Returns every stored order as-is; no projection.
pub struct ListOrders {
    store: Arc<dyn OrderStore>,
}

impl ListOrders {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self) -> OrderResult<Vec<Order>> {
        let orders = self.store.get_all().await?;
        tracing::debug!(count = orders.len(), "Listed orders");
        Ok(orders)
    }
}
