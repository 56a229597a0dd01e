//! Environment-driven configuration for the Motopp backend.
//!
//! Reads a fixed set of environment variables once at startup, applies
//! per-environment defaults and composes the database and cache
//! connection URLs consumed by the rest of the stack.
//!
//! # Environment variables
//!
//! - `ENV`: exactly `prod` selects the production profile; anything
//!   else is development.
//! - `SECRET_KEY`: session signing key (required in production).
//! - `REDIS_HOST`: cache hostname (default `localhost`).
//! - `MYSQL_USER`, `MYSQL_PASSWORD`, `MYSQL_HOST`, `MYSQL_DATABASE`:
//!   database settings, consulted only in production (defaults `root`,
//!   none, `mysql`, `motopp`). Development always uses the fixed local
//!   profile `root:root@localhost/motopp`.
//!
//! Deployments point `REDIS_HOST` and `MYSQL_HOST` at their container
//! service names; the defaults suit local development.

mod cache;
mod database;
mod environment;
mod error;
mod secret;

pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use error::ConfigError;
pub use secret::Secret;

use serde::Serialize;
use std::env;
use std::path::Path;
use tracing::{info, warn};

/// Root configuration for the Motopp backend.
///
/// Built once at process startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Selected deployment environment.
    pub environment: Environment,
    /// Session signing key (from `SECRET_KEY`, required in production).
    pub secret_key: Option<Secret>,
    /// Cache endpoint settings.
    pub cache: CacheConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore error if not found)
        dotenvy::dotenv().ok();

        Self::from_process_env()
    }

    /// Load configuration, reading `path` as an env file first.
    ///
    /// Unlike the implicit `.env` lookup in [`Config::load`], a missing
    /// or unreadable file is an error here.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::from_path(path.as_ref())?;

        Self::from_process_env()
    }

    fn from_process_env() -> Result<Self, ConfigError> {
        let config = Self::from_lookup(|key| env::var(key).ok());
        config.validate()?;

        if config.secret_key.is_none() {
            // Reachable only in development; production fails validation above
            warn!("SECRET_KEY is not set, sessions will not survive restarts");
        }

        info!(
            environment = %config.environment,
            database = %config.database.redacted_url(),
            cache = %config.cache.url(),
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Build the record from an arbitrary variable source.
    ///
    /// Empty values are treated as unset. Does not validate; tests use
    /// this with map-backed lookups instead of mutating the process
    /// environment.
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let environment = match get("ENV").as_deref() {
            Some("prod") => Environment::Production,
            _ => Environment::Development,
        };

        let secret_key = get("SECRET_KEY").map(Secret::new);

        let cache = CacheConfig {
            host: get("REDIS_HOST").unwrap_or_else(|| "localhost".to_string()),
        };

        let database = match environment {
            Environment::Production => DatabaseConfig {
                user: get("MYSQL_USER").unwrap_or_else(|| "root".to_string()),
                password: get("MYSQL_PASSWORD").map(Secret::new),
                host: get("MYSQL_HOST").unwrap_or_else(|| "mysql".to_string()),
                name: get("MYSQL_DATABASE").unwrap_or_else(|| "motopp".to_string()),
                log_statements: false,
            },
            Environment::Development => DatabaseConfig::local(),
        };

        Config {
            environment,
            secret_key,
            cache,
            database,
        }
    }

    /// Validate the configuration.
    ///
    /// Secrets are only required in production; development runs
    /// without them.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.environment.is_production() {
            if self.secret_key.is_none() {
                return Err(ConfigError::MissingVar("SECRET_KEY"));
            }
            if self.database.password.is_none() {
                return Err(ConfigError::MissingVar("MYSQL_PASSWORD"));
            }
        }

        Ok(())
    }

    /// Multi-line report of the effective configuration with secrets
    /// redacted, for startup logs and the check binary.
    pub fn summary(&self) -> String {
        format!(
            "Motopp configuration:\n\
             - Environment: {}\n\
             - Secret key: {}\n\
             - Database: {}\n\
             - SQL statement log: {}\n\
             - Cache: {}",
            self.environment,
            if self.secret_key.is_some() { "set" } else { "not set" },
            self.database.redacted_url(),
            if self.database.log_statements { "on" } else { "off" },
            self.cache.url(),
        )
    }
}

#[cfg(test)]
mod tests;
