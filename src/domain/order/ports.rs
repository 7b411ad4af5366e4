use async_trait::async_trait;

use super::entity::{Order, OrderNumber};
use super::errors::OrderResult;

// ============================================================================
// Order Capabilities
// ============================================================================
//
// The two seams between order workflows and infrastructure. Workflows hold
// `Arc<dyn OrderStore>` / `Arc<dyn OrderDispatch>` and never see a concrete
// backend; the backend is picked once at startup (see `crate::backends`).
//
// ============================================================================

/// Persistence of orders keyed by their business number.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert (or, for backends that allow it, overwrite) an order.
    async fn save(&self, order: &Order) -> OrderResult<()>;

    /// Fetch one order. A miss is `OrderError::NotFound`.
    async fn get_by_order_number(&self, order_number: OrderNumber) -> OrderResult<Order>;

    /// Snapshot of every stored order, in no particular order.
    async fn get_all(&self) -> OrderResult<Vec<Order>>;

    /// Short backend name for logs.
    fn backend_name(&self) -> &'static str;
}

/// Hands an order to asynchronous downstream processing.
///
/// Delivery is a single synchronous attempt: the caller sees success or the
/// error, and nothing is retried here.
#[async_trait]
pub trait OrderDispatch: Send + Sync {
    async fn send(&self, order: &Order) -> OrderResult<()>;

    fn backend_name(&self) -> &'static str;
}
