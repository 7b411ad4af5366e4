use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::error::DatabaseError;
use sqlx::Row;
use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::domain::order::{Order, OrderError, OrderNumber, OrderResult, OrderStore};

// ============================================================================
// PostgreSQL Order Store
// ============================================================================
//
// Table layout (one row per order):
//
//   orders(id, data, order_id, status, paid, created_at, updated_at)
//
// `save` is a plain INSERT. `order_id` is UNIQUE, so inserting an existing
// order number fails with `DuplicateOrderNumber` instead of overwriting. A
// clash on the `id` primary key is a plain storage failure.
// Concurrency control is whatever the pool and transaction isolation give us.
//
// ============================================================================

const CREATE_ORDERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS orders (
    id         TEXT PRIMARY KEY,
    data       TEXT NOT NULL,
    order_id   BIGINT NOT NULL,
    status     TEXT NOT NULL,
    paid       BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL,
    CONSTRAINT orders_order_id_key UNIQUE (order_id)
)";

/// Must match the constraint name in `CREATE_ORDERS_TABLE`.
const ORDER_NUMBER_CONSTRAINT: &str = "orders_order_id_key";

const SELECT_COLUMNS: &str = "SELECT id, data, order_id, status, paid, created_at, updated_at FROM orders";

pub struct PostgresOrderStore {
    pool: PgPool,
}

impl PostgresOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool from config and make sure the `orders` table exists.
    pub async fn connect(config: &DatabaseConfig) -> OrderResult<Self> {
        tracing::info!(max_connections = config.max_connections, "Connecting to PostgreSQL");

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await?;

        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    pub async fn ensure_schema(&self) -> OrderResult<()> {
        sqlx::query(CREATE_ORDERS_TABLE).execute(&self.pool).await?;
        tracing::debug!("orders table ready");
        Ok(())
    }
}

fn order_from_row(row: &PgRow) -> Result<Order, sqlx::Error> {
    Ok(Order {
        id: row.try_get("id")?,
        payload: row.try_get("data")?,
        order_number: row.try_get("order_id")?,
        status: row.try_get("status")?,
        paid: row.try_get("paid")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn is_order_number_conflict(db: &dyn DatabaseError) -> bool {
    db.is_unique_violation() && db.constraint() == Some(ORDER_NUMBER_CONSTRAINT)
}

/// Only a hit on the order-number constraint is a domain error; everything
/// else, primary-key clashes included, is a storage failure.
fn classify_insert_error(err: sqlx::Error, order_number: OrderNumber) -> OrderError {
    match err {
        sqlx::Error::Database(ref db) if is_order_number_conflict(db.as_ref()) => {
            OrderError::DuplicateOrderNumber(order_number)
        }
        other => OrderError::Storage(other),
    }
}

/// Orders arriving without a storage id get a fresh one.
fn storage_id(order: &Order) -> String {
    if order.id.is_empty() {
        Uuid::new_v4().to_string()
    } else {
        order.id.clone()
    }
}

#[async_trait]
impl OrderStore for PostgresOrderStore {
    async fn save(&self, order: &Order) -> OrderResult<()> {
        let id = storage_id(order);

        sqlx::query(
            "INSERT INTO orders (id, data, order_id, status, paid, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&id)
        .bind(&order.payload)
        .bind(order.order_number)
        .bind(&order.status)
        .bind(order.paid)
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| classify_insert_error(e, order.order_number))?;

        tracing::info!(
            id = %id,
            order_number = order.order_number,
            "✅ Inserted order"
        );

        Ok(())
    }

    async fn get_by_order_number(&self, order_number: OrderNumber) -> OrderResult<Order> {
        let row = sqlx::query(&format!("{} WHERE order_id = $1", SELECT_COLUMNS))
            .bind(order_number)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(order_from_row(&row)?),
            None => Err(OrderError::NotFound(order_number)),
        }
    }

    async fn get_all(&self) -> OrderResult<Vec<Order>> {
        let rows = sqlx::query(SELECT_COLUMNS).fetch_all(&self.pool).await?;

        let orders = rows
            .iter()
            .map(order_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = orders.len(), "Loaded orders");
        Ok(orders)
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
