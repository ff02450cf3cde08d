//! Server settings loaded via OrthoConfig.
//!
//! Values are layered from defaults, configuration files, `EMPLOYEES_*`
//! environment variables and command-line flags, in increasing precedence.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_DB_CONNECTION_TIMEOUT_SECS: u64 = 30;

/// Failures raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// `bind_addr` is not a `host:port` socket address.
    #[error("invalid bind address: {value}")]
    InvalidBindAddr { value: String },
    /// The pool was configured with zero connections.
    #[error("db_max_connections must be at least 1")]
    ZeroPoolSize,
}

/// Configuration values controlling the HTTP server and its store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EMPLOYEES")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL; the in-memory store is used when absent.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub db_connection_timeout: Option<u64>,
    /// Apply embedded migrations before serving; on unless set to `false`.
    pub run_migrations: Option<bool>,
}

impl ServerSettings {
    /// Parse the configured bind address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// [`SettingsError::InvalidBindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|_| SettingsError::InvalidBindAddr {
            value: raw.to_owned(),
        })
    }

    /// Return the configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Whether embedded migrations run at startup, defaulting to `true`.
    #[must_use]
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }

    /// Build pool settings when a database is configured.
    ///
    /// # Errors
    /// [`SettingsError::ZeroPoolSize`] when `db_max_connections` is 0.
    pub fn pool_config(&self) -> Result<Option<PoolConfig>, SettingsError> {
        let Some(url) = self.database_url() else {
            return Ok(None);
        };
        let max_size = self
            .db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS);
        if max_size == 0 {
            return Err(SettingsError::ZeroPoolSize);
        }
        let timeout = self
            .db_connection_timeout
            .unwrap_or(DEFAULT_DB_CONNECTION_TIMEOUT_SECS);

        Ok(Some(
            PoolConfig::new(url)
                .with_max_size(max_size)
                .with_connection_timeout(Duration::from_secs(timeout)),
        ))
    }
}
