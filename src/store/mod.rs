// ============================================================================
// Order Store Backends
// ============================================================================

mod in_memory;
mod postgres;

pub use in_memory::InMemoryOrderStore;
pub use postgres::PostgresOrderStore;
