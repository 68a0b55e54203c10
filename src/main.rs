//! TODO CRUD Service
//!
//! A minimal HTTP CRUD service for TODO entities backed by SQLite, built
//! with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────────┐
//!                    │                 TODO SERVICE                  │
//!                    │                                               │
//!  Client Request    │  ┌──────────┐   ┌───────────┐   ┌─────────┐  │
//!  ──────────────────┼─▶│ recovery │──▶│access log │──▶│  basic  │  │
//!                    │  │ (panic)  │   │ (1/req)   │   │  auth   │  │
//!                    │  └──────────┘   └───────────┘   └────┬────┘  │
//!                    │                                      │       │
//!                    │                                      ▼       │
//!                    │  ┌──────────┐   ┌───────────┐   ┌─────────┐  │
//!  Client Response   │  │  JSON    │◀──│ handlers  │──▶│  store  │──┼──▶ SQLite
//!  ◀─────────────────┼──│ response │   │ (dispatch)│   │ gateway │  │
//!                    │  └──────────┘   └───────────┘   └─────────┘  │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐  │
//!                    │  │          Cross-Cutting Concerns          │  │
//!                    │  │  config · observability · lifecycle      │  │
//!                    │  └─────────────────────────────────────────┘  │
//!                    └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use todo_service::config::load_config;
use todo_service::lifecycle::{signals, Shutdown};
use todo_service::observability::{logging, metrics};
use todo_service::{HttpServer, TodoStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("todo-service v{} starting", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::var("CONFIG_PATH").ok().map(PathBuf::from);
    let config = load_config(config_path.as_deref())?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        database_url = %config.database.url,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Set up the store (pool + schema bootstrap)
    let store = TodoStore::connect(&config.database.url, config.database.max_connections).await?;
    store.migrate().await?;

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    // Metrics exporter (optional)
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Shutdown coordination: SIGINT/SIGTERM → graceful drain
    let shutdown = Arc::new(Shutdown::new());
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::shutdown_on_signal(shutdown.clone()));

    // Create and run HTTP server
    let server = HttpServer::new(config, store);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
