//! Metrics collection and exposition.
//!
//! # Metrics
//! - `todo_requests_total` (counter): total requests by method, status
//! - `todo_request_duration_seconds` (histogram): latency by method
//!
//! # Design Decisions
//! - Recorded once per request from the access-log middleware
//! - Exposition via the Prometheus exporter's own HTTP listener, enabled by
//!   config; when disabled the facade macros are no-ops

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "failed to install metrics exporter"),
    }
}

/// Record one completed request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    metrics::counter!(
        "todo_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    metrics::histogram!(
        "todo_request_duration_seconds",
        "method" => method.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}
