//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger graceful shutdown
//!
//! Shutdown (shutdown.rs):
//!     Signal received → stop accepting → drain in-flight → force close
//! ```
//!
//! # Design Decisions
//! - Shutdown has a timeout: forced exit after the configured grace period
//! - A broadcast channel fans the signal out to every long-running task

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
