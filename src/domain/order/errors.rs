use super::entity::OrderNumber;

// ============================================================================
// Order Errors
// ============================================================================
//
// Shared by every store and dispatch backend so that swapping a backend never
// changes what callers have to match on.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order not found: {0}")]
    NotFound(OrderNumber),

    #[error("order number already exists: {0}")]
    DuplicateOrderNumber(OrderNumber),

    #[error("order store failure: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("order serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("order dispatch failed: {0}")]
    Transport(String),
}

impl OrderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, OrderError::NotFound(_))
    }

    /// Anything that is not a lookup miss or a key conflict.
    pub fn is_backend_failure(&self) -> bool {
        matches!(
            self,
            OrderError::Storage(_) | OrderError::Serialization(_) | OrderError::Transport(_)
        )
    }
}

pub type OrderResult<T> = Result<T, OrderError>;
