//! Staffdir Gateway - HTTP API for the employee directory
//!
//! This is the main entry point for the gateway service. It opens the
//! employee store, optionally seeds the demo organizations, and serves the
//! search API.
//!
//! # Configuration
//!
//! - `LISTEN_ADDR` - bind address (default `0.0.0.0:8080`)
//! - `DATA_DIR` - `RocksDB` directory; unset keeps records in memory
//! - `SEED_DEMO_DATA` - seed an empty store (default `true`)
//! - `RATE_LIMIT_MAX_REQUESTS` - requests per window (default 2)
//! - `RATE_LIMIT_WINDOW_SECONDS` - window length (default 60)

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use staffdir_gateway::{create_router, GatewayConfig, GatewayState};
use staffdir_search::SearchService;
use staffdir_store::{seed, EmployeeStore, MemoryStore, RocksStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,staffdir=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Staffdir Gateway");

    let config = GatewayConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        data_dir = ?config.data_dir,
        seed_demo_data = config.seed_demo_data,
        rate_limit_max_requests = config.rate_limit.max_requests,
        rate_limit_window_seconds = config.rate_limit.window_seconds,
        "Gateway configuration loaded"
    );

    match config.data_dir.clone() {
        Some(data_dir) => {
            tracing::info!(path = %data_dir, "Opening RocksDB store");
            let store = Arc::new(RocksStore::open(&data_dir)?);
            serve(store, config).await
        }
        None => {
            tracing::warn!("No DATA_DIR set - records are kept in memory only");
            serve(Arc::new(MemoryStore::new()), config).await
        }
    }
}

async fn serve<S>(store: Arc<S>, config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>>
where
    S: EmployeeStore + 'static,
{
    if config.seed_demo_data {
        let inserted = seed::seed_if_empty(&*store)?;
        tracing::info!(inserted, "Demo data check complete");
    }

    let search = Arc::new(SearchService::with_builtin_columns(store));
    let listen_addr = config.listen_addr.clone();
    let state = GatewayState::new(search, config);

    let app = create_router(state);
    tracing::info!("Router configured");

    // Start HTTP server
    tracing::info!(listen_addr = %listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
