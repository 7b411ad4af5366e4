// ============================================================================
// Order Domain
// ============================================================================
//
// This module contains ALL Order-specific domain code:
// - Entity (Order)
// - Errors (OrderError enum)
// - Ports (OrderStore, OrderDispatch capabilities)
//
// Concrete backends live in `crate::store` and `crate::messaging`.
//
// ============================================================================

pub mod entity;
pub mod errors;
pub mod ports;

// Re-export for convenience
pub use entity::*;
pub use errors::*;
pub use ports::*;
