//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the /todos method dispatch table
//! - Wire up the middleware chain in its fixed order
//! - Serve with graceful shutdown and a bounded drain grace period

use std::time::Duration;

use axum::{
    middleware,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::http::handlers;
use crate::http::middleware::{access_log_middleware, basic_auth_middleware, recovery_layer};
use crate::store::TodoStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: TodoStore,
}

/// HTTP server for the TODO service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and store.
    pub fn new(config: ServiceConfig, store: TodoStore) -> Self {
        let state = AppState { store };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router.
    ///
    /// `/todos` dispatches per method; anything else on that path answers
    /// 400. Middleware composition is fixed here, outermost first:
    /// recovery → access log → basic auth → trace → timeout → handler.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route(
                "/todos",
                get(handlers::list_todos)
                    .post(handlers::create_todo)
                    .put(handlers::update_todo)
                    .delete(handlers::delete_todos)
                    .fallback(handlers::method_not_supported),
            )
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(recovery_layer())
                    .layer(middleware::from_fn(access_log_middleware))
                    .layer(middleware::from_fn_with_state(
                        config.auth.clone(),
                        basic_auth_middleware,
                    ))
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// On shutdown the listener stops accepting and in-flight requests get
    /// the configured grace period to drain; after the deadline the serve
    /// future is dropped, force-closing what remains.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let grace = Duration::from_secs(self.config.shutdown.grace_period_secs);
        let mut force_close = shutdown.resubscribe();

        let serve = axum::serve(listener, self.router).with_graceful_shutdown(async move {
            let _ = shutdown.recv().await;
            tracing::info!("shutdown signal received, draining in-flight requests");
        });

        tokio::select! {
            result = serve => result?,
            _ = async {
                let _ = force_close.recv().await;
                tokio::time::sleep(grace).await;
            } => {
                tracing::warn!(grace_secs = grace.as_secs(), "grace period elapsed, forcing close");
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
