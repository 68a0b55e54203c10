//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration: TOML file if given, then environment overrides,
/// then semantic validation.
pub fn load_config(path: Option<&Path>) -> Result<ServiceConfig, ConfigError> {
    let mut config = match path {
        Some(p) => {
            let content = fs::read_to_string(p).map_err(ConfigError::Io)?;
            toml::from_str(&content).map_err(ConfigError::Parse)?
        }
        None => ServiceConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply the documented environment overrides.
///
/// `PORT` accepts a bare port ("8080") or a full address ("0.0.0.0:8080");
/// `DB_PATH` accepts a filesystem path or a full `sqlite:` URL.
fn apply_env_overrides<F>(config: &mut ServiceConfig, var: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = var("PORT") {
        config.listener.bind_address = if port.contains(':') {
            port
        } else {
            format!("0.0.0.0:{}", port)
        };
    }

    if let Some(db_path) = var("DB_PATH") {
        config.database.url = if db_path.starts_with("sqlite:") {
            db_path
        } else {
            format!("sqlite:{}", db_path)
        };
    }

    if let Some(user) = var("BASIC_AUTH_USER_ID") {
        config.auth.username = user;
    }

    if let Some(digest) = var("BASIC_AUTH_PASSWORD") {
        config.auth.password_sha256 = digest;
    }
}
