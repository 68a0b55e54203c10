//! Per-request access logging.
//!
//! Emits exactly one structured record per request, after the inner handler
//! completes, regardless of outcome. Logging never blocks or fails the
//! response; a record that cannot be serialized is dropped.

use std::time::Instant;

use axum::{
    body::Body,
    http::{header::USER_AGENT, Request},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::observability::metrics;

/// One access-log record: wall-clock start, latency in microseconds,
/// request path, and the caller's OS as derived from the User-Agent header.
#[derive(Debug, Serialize)]
pub struct AccessRecord {
    pub timestamp: DateTime<Utc>,
    pub latency: i64,
    pub path: String,
    pub os: String,
}

impl AccessRecord {
    /// Serialize and emit on the `access` target; serialization failure is
    /// swallowed, never surfaced to the client.
    fn emit(&self) {
        match serde_json::to_string(self) {
            Ok(line) => tracing::info!(target: "access", "{}", line),
            Err(e) => tracing::debug!(error = %e, "access record dropped"),
        }
    }
}

pub async fn access_log_middleware(request: Request<Body>, next: Next) -> Response {
    let timestamp = Utc::now();
    let start = Instant::now();
    let path = request.uri().path().to_string();
    let method = request.method().to_string();
    let os = request
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(os_name)
        .unwrap_or_default()
        .to_string();

    let response = next.run(request).await;

    let record = AccessRecord {
        timestamp,
        latency: start.elapsed().as_micros() as i64,
        path,
        os,
    };
    record.emit();
    metrics::record_request(&method, response.status().as_u16(), start);

    response
}

/// Extract an OS name from a User-Agent string.
///
/// Only the OS output of the full parser is consumed, so a substring match
/// over the platform token is sufficient here.
fn os_name(user_agent: &str) -> &'static str {
    if user_agent.contains("Windows") {
        "Windows"
    } else if user_agent.contains("iPhone") || user_agent.contains("iPad") {
        "iOS"
    } else if user_agent.contains("Android") {
        "Android"
    } else if user_agent.contains("Mac OS X") || user_agent.contains("Macintosh") {
        "macOS"
    } else if user_agent.contains("Linux") {
        "Linux"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_name_from_common_agents() {
        assert_eq!(
            os_name("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"),
            "Windows"
        );
        assert_eq!(
            os_name("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) Safari/605.1.15"),
            "macOS"
        );
        assert_eq!(
            os_name("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"),
            "iOS"
        );
        assert_eq!(os_name("Mozilla/5.0 (Linux; Android 14) Chrome/120.0"), "Android");
        assert_eq!(os_name("Mozilla/5.0 (X11; Linux x86_64) Firefox/121.0"), "Linux");
        assert_eq!(os_name("curl/8.4.0"), "");
    }

    #[test]
    fn record_serializes_expected_fields() {
        let record = AccessRecord {
            timestamp: Utc::now(),
            latency: 42,
            path: "/todos".into(),
            os: "Linux".into(),
        };
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&record).unwrap()).unwrap();
        assert_eq!(json["latency"], 42);
        assert_eq!(json["path"], "/todos");
        assert_eq!(json["os"], "Linux");
        assert!(json["timestamp"].is_string());
    }
}
