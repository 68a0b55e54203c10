//! Cross-cutting middleware wrapping the TODO handlers.
//!
//! Three independent wrappers, each "takes a handler, returns a handler".
//! Composition order is fixed in `http::server::build_router`, outermost
//! first: recovery → access log → basic auth → handler. Recovery sits
//! outermost so it catches failures from everything inside; the access
//! logger sits outside auth so rejected requests still produce a record.

pub mod access_log;
pub mod basic_auth;
pub mod recovery;

pub use access_log::access_log_middleware;
pub use basic_auth::basic_auth_middleware;
pub use recovery::recovery_layer;
