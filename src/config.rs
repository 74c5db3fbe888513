//! Process configuration from `.env` / environment variables.

use crate::error::ConfigError;

/// Runtime configuration. `db_driver` exists for parity with the deployment
/// environment files; sqlx picks the driver at compile time, so anything
/// other than `postgres` is rejected up front.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_driver: String,
    pub db_source: String,
    pub server_address: String,
}

const DB_DRIVER: &str = "DB_DRIVER";
const DB_SOURCE: &str = "DB_SOURCE";
const SERVER_ADDRESS: &str = "SERVER_ADDRESS";

impl Config {
    /// Load from a `.env` file if present, then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Tests inject maps here instead of
    /// mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_driver = lookup(DB_DRIVER).unwrap_or_else(|| "postgres".into());
        if db_driver != "postgres" {
            return Err(ConfigError::UnsupportedDriver(db_driver));
        }
        let db_source = lookup(DB_SOURCE).ok_or(ConfigError::MissingKey(DB_SOURCE))?;
        let server_address =
            lookup(SERVER_ADDRESS).ok_or(ConfigError::MissingKey(SERVER_ADDRESS))?;
        Ok(Config {
            db_driver,
            db_source,
            server_address,
        })
    }
}
