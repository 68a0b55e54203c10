//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional TOML file (CONFIG_PATH)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (environment overrides: PORT, DB_PATH, auth secrets)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → handed to subsystems at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Request handling never reads ambient environment state; secrets are
//!   resolved here, once, at startup

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{AuthConfig, ServiceConfig};
