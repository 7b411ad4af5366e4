// ============================================================================
// Domain Layer
// ============================================================================
//
// Backend-agnostic order types and the capability traits that infrastructure
// implements. Nothing in here knows about PostgreSQL, Kafka or HTTP.
//
// ============================================================================

pub mod order;
