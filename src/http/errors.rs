use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::domain::order::OrderError;

// ============================================================================
// HTTP Boundary Errors
// ============================================================================
//
//   InvalidOrderId / InvalidBody  → 400
//   NotFound                      → 404
//   DuplicateOrderNumber          → 409
//   storage / serialization / transport failures → 500
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid order id: {0}")]
    InvalidOrderId(String),

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Order(#[from] OrderError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidOrderId(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Order(OrderError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Order(OrderError::DuplicateOrderNumber(_)) => StatusCode::CONFLICT,
            ApiError::Order(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}
