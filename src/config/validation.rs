//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (addresses parse, pool size > 0)
//! - Check credential shape (username non-empty, digest is 64 hex chars)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::ServiceConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidBindAddress(String),
    EmptyDatabaseUrl,
    ZeroPoolSize,
    EmptyUsername,
    InvalidPasswordDigest(String),
    ZeroTimeout,
    InvalidMetricsAddress(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "listener.bind_address '{}' is not a valid socket address", addr)
            }
            ValidationError::EmptyDatabaseUrl => write!(f, "database.url must not be empty"),
            ValidationError::ZeroPoolSize => {
                write!(f, "database.max_connections must be at least 1")
            }
            ValidationError::EmptyUsername => write!(f, "auth.username must not be empty"),
            ValidationError::InvalidPasswordDigest(d) => {
                write!(f, "auth.password_sha256 '{}' is not a 64-char hex digest", d)
            }
            ValidationError::ZeroTimeout => write!(f, "timeouts.request_secs must be at least 1"),
            ValidationError::InvalidMetricsAddress(addr) => {
                write!(f, "observability.metrics_address '{}' is not a valid socket address", addr)
            }
        }
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.database.url.is_empty() {
        errors.push(ValidationError::EmptyDatabaseUrl);
    }
    if config.database.max_connections == 0 {
        errors.push(ValidationError::ZeroPoolSize);
    }

    if config.auth.username.is_empty() {
        errors.push(ValidationError::EmptyUsername);
    }
    let digest = &config.auth.password_sha256;
    if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
        errors.push(ValidationError::InvalidPasswordDigest(digest.clone()));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
