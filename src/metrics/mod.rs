// Private module declaration
mod server;

use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry};

// Re-export for public API
pub use server::configure as configure_routes;

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - HTTP requests (count by route/status, latency by route)
// - Order dispatch outcomes
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

pub struct Metrics {
    registry: Registry,

    // HTTP Metrics
    pub http_requests_total: IntCounterVec,
    pub http_request_duration: HistogramVec,

    // Dispatch Metrics
    pub orders_dispatched: IntCounter,
    pub dispatch_failures: IntCounter,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total HTTP requests handled"),
            &["route", "status"],
        )?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let http_request_duration = HistogramVec::new(
            HistogramOpts::new("http_request_duration_seconds", "HTTP request handling duration")
                .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
            &["route"],
        )?;
        registry.register(Box::new(http_request_duration.clone()))?;

        let orders_dispatched = IntCounter::new(
            "orders_dispatched_total",
            "Orders successfully handed to the dispatch backend",
        )?;
        registry.register(Box::new(orders_dispatched.clone()))?;

        let dispatch_failures = IntCounter::new(
            "order_dispatch_failures_total",
            "Orders the dispatch backend rejected",
        )?;
        registry.register(Box::new(dispatch_failures.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration,
            orders_dispatched,
            dispatch_failures,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Helper to record one handled HTTP request
    pub fn record_request(&self, route: &str, status: u16, duration_secs: f64) {
        self.http_requests_total
            .with_label_values(&[route, &status.to_string()])
            .inc();
        self.http_request_duration
            .with_label_values(&[route])
            .observe(duration_secs);
    }

    /// Helper to record a dispatch outcome
    pub fn record_dispatch(&self, success: bool) {
        if success {
            self.orders_dispatched.inc();
        } else {
            self.dispatch_failures.inc();
        }
    }
}
