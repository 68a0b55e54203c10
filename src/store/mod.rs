//! Persistence subsystem.
//!
//! # Data Flow
//! ```text
//! handler call
//!     → sqlite.rs (parameterized SQL against the todos table)
//!     → SqlitePool (connection checkout, cancellation on drop)
//!     → Result<Todo | Vec<Todo> | ()>, StoreError on failure
//! ```
//!
//! # Design Decisions
//! - The gateway owns no business rules beyond existence checks
//! - Store errors are logged at this boundary and returned verbatim;
//!   status-code mapping belongs to the handlers
//! - Every call is independently cancellable (dropping the future aborts
//!   the query); no call assumes exclusive access to the store

pub mod sqlite;

pub use sqlite::TodoStore;
