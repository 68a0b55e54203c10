//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → middleware/recovery.rs (panic → 500)
//!     → middleware/access_log.rs (one record per request, on the way out)
//!     → middleware/basic_auth.rs (401 + challenge, short-circuit)
//!     → handlers.rs (method dispatch, validation, store calls)
//!     → store (parameterized SQL)
//!     → JSON response back through the chain
//! ```

pub mod handlers;
pub mod middleware;
pub mod server;

pub use server::{AppState, HttpServer};
