// ============================================================================
// Order Workflows
// ============================================================================
//
// Each workflow takes its capabilities through the constructor and
// translates between wire DTOs and the `Order` entity. Backend errors are
// returned unchanged.
//
// ============================================================================

mod create_order;
mod get_order;
mod list_orders;

pub use create_order::{CreateOrder, CreateOrderInput, CreateOrderOutput};
pub use get_order::{GetOrder, GetOrderInput, GetOrderOutput};
pub use list_orders::ListOrders;
