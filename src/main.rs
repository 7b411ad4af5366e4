use actix_web::{web, App, HttpServer};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod backends;
mod config;
mod domain;
mod http;
mod messaging;
mod metrics;
mod store;
mod usecase;

#[cfg(test)]
mod testing;

use backends::Backends;
use config::AppConfig;
use http::OrderHandlers;

#[derive(Parser, Debug)]
#[command(name = "order_service", about = "Order management HTTP service")]
struct Args {
    /// Path to the YAML config file
    #[arg(long, default_value = "config/config.yaml")]
    config: PathBuf,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = AppConfig::load(&args.config)?;

    // Structured logging; RUST_LOG overrides the configured level
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    tracing::info!(
        config = %args.config.display(),
        env = %config.env,
        "🚀 Starting order service"
    );

    // === 1. Backends (selected once from `env`) ===
    let backends = Backends::from_config(&config).await?;

    // === 2. Metrics ===
    let metrics = Arc::new(metrics::Metrics::new()?);
    tracing::info!("📊 Metrics registry created with {} metrics", metrics.registry().gather().len());

    // === 3. HTTP server ===
    let handlers = web::Data::new(OrderHandlers::new(&backends));
    let metrics_data = web::Data::new(metrics);
    let (host, port) = config.bind_address();

    tracing::info!("Listening on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(handlers.clone())
            .app_data(metrics_data.clone())
            .configure(http::configure)
            .configure(metrics::configure_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    tracing::info!("Order service stopped");
    Ok(())
}
