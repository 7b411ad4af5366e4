use std::sync::Arc;

use crate::config::{AppConfig, Environment};
use crate::domain::order::{Order, OrderDispatch, OrderResult, OrderStore};
use crate::messaging::{LoggingOrderDispatch, RedpandaOrderDispatch};
use crate::store::{InMemoryOrderStore, PostgresOrderStore};

// ============================================================================
// Backend Selection
// ============================================================================
//
// Built once at startup from the `env` selector and handed to the workflows
// by value; nothing downstream looks at the environment again.
//
//   dev  → in-memory store   + logging dispatch
//   prod → PostgreSQL store  + Redpanda dispatch
//
// ============================================================================

#[derive(Clone)]
pub struct Backends {
    pub store: Arc<dyn OrderStore>,
    pub dispatch: Arc<dyn OrderDispatch>,
}

impl Backends {
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let backends = match config.env {
            Environment::Dev => Self::dev(config.dev.seed_sample_order).await?,
            Environment::Prod => {
                let prod = config.prod()?;
                let store = PostgresOrderStore::connect(&prod.db).await?;
                let dispatch = RedpandaOrderDispatch::new(&prod.kafka)?;
                Self {
                    store: Arc::new(store),
                    dispatch: Arc::new(dispatch),
                }
            }
        };

        tracing::info!(
            env = %config.env,
            store = backends.store.backend_name(),
            dispatch = backends.dispatch.backend_name(),
            "Backends ready"
        );

        Ok(backends)
    }

    pub async fn dev(seed_sample_order: bool) -> OrderResult<Self> {
        let store = InMemoryOrderStore::new();
        if seed_sample_order {
            store.save(&sample_order()).await?;
        }

        Ok(Self {
            store: Arc::new(store),
            dispatch: Arc::new(LoggingOrderDispatch::new()),
        })
    }
}

/// Order placed in the dev store so `GET /orders/123` answers out of the box.
pub fn sample_order() -> Order {
    Order::new("Sample Order Data", 123, "Completed")
        .with_id("123")
        .with_paid(true)
}
