use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Order Entity
// ============================================================================
//
// The record exchanged between the workflow layer and the store/dispatch
// backends. Field names on the wire follow the public JSON contract of the
// service (`Data`, `OrderId`, ...), not the Rust names.
//
// ============================================================================

/// Business identifier of an order, unique within a store.
pub type OrderNumber = i64;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Order {
    /// Storage identifier. Empty until a backend assigns one.
    #[serde(default)]
    pub id: String,
    #[serde(rename = "Data")]
    pub payload: String,
    #[serde(rename = "OrderId")]
    pub order_number: OrderNumber,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Paid")]
    pub paid: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// A fresh, unpaid, not-yet-persisted order stamped with the current time.
    pub fn new(
        payload: impl Into<String>,
        order_number: OrderNumber,
        status: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            payload: payload.into(),
            order_number,
            status: status.into(),
            paid: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_paid(mut self, paid: bool) -> Self {
        self.paid = paid;
        self
    }

    /// Serialize to the JSON body used by dispatch backends.
    pub fn to_wire(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
