//! Connection configuration for the relational store.
//!
//! Settings are read from the environment exactly once, at the process
//! boundary, into an explicit [`StoreConfig`] that both pipeline stages take
//! by reference. Nothing is validated up front: a missing database name or an
//! unparseable port surfaces as a connection-time failure.

use std::env;

/// Environment variable holding the store host (default `db`).
pub const ENV_HOST: &str = "POSTGRES_HOST";
/// Environment variable holding the store port (default `5432`).
pub const ENV_PORT: &str = "POSTGRES_PORT";
/// Environment variable holding the database name (required at connect time).
pub const ENV_DB: &str = "POSTGRES_DB";
/// Environment variable holding the user (required at connect time).
pub const ENV_USER: &str = "POSTGRES_USER";
/// Environment variable holding the password.
pub const ENV_PASSWORD: &str = "POSTGRES_PASSWORD";

/// Connection settings for the relational store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Host name or address.
    pub host: String,
    /// Port, kept as text; parsed (and possibly rejected) at connect time.
    pub port: String,
    /// Database name, if configured.
    pub dbname: Option<String>,
    /// User, if configured.
    pub user: Option<String>,
    /// Password, if configured.
    pub password: Option<String>,
}

impl StoreConfig {
    /// Read connection settings from `POSTGRES_*` environment variables,
    /// applying defaults for host and port.
    pub fn from_env() -> Self {
        Self {
            host: env::var(ENV_HOST).unwrap_or_else(|_| "db".to_string()),
            port: env::var(ENV_PORT).unwrap_or_else(|_| "5432".to_string()),
            dbname: env::var(ENV_DB).ok(),
            user: env::var(ENV_USER).ok(),
            password: env::var(ENV_PASSWORD).ok(),
        }
    }
}
