//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Configure log level via RUST_LOG with a sensible default
//!
//! # Design Decisions
//! - `tracing` everywhere; no println-style logging
//! - The access log uses its own `access` target so it can be filtered or
//!   redirected independently of diagnostics

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_service=debug,tower_http=debug,access=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
