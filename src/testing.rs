//! Test doubles shared by workflow and HTTP tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::order::{Order, OrderDispatch, OrderError, OrderResult};

/// Keeps every serialized body it is asked to send.
#[derive(Default)]
pub struct RecordingDispatch {
    sent: Mutex<Vec<String>>,
}

impl RecordingDispatch {
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderDispatch for RecordingDispatch {
    async fn send(&self, order: &Order) -> OrderResult<()> {
        let body = order.to_wire()?;
        self.sent.lock().unwrap().push(body);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "recording"
    }
}

/// Rejects every message like an unreachable broker.
pub struct FailingDispatch;

#[async_trait]
impl OrderDispatch for FailingDispatch {
    async fn send(&self, _order: &Order) -> OrderResult<()> {
        Err(OrderError::Transport("broker unavailable".to_string()))
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}
