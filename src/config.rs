//! Runtime settings for the service.
//!
//! Values arrive from command-line flags or their environment fallbacks (see
//! the `docket-server` binary) and are validated here before anything opens
//! a socket or a database.

use std::net::{Ipv4Addr, SocketAddr};
use thiserror::Error;

use crate::task::adapters::sqlite::{DatabaseUrl, DatabaseUrlError};

/// Database used when no connection string is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///./docket.db";

/// Listen address used when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Connection pool size used when none is configured.
pub const DEFAULT_POOL_SIZE: u32 = 8;

/// Log filter used when neither `RUST_LOG` nor a configured filter is set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised while validating settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The database URL is empty.
    #[error("database url must not be empty")]
    EmptyDatabaseUrl,

    /// The database URL names a backend other than `SQLite`.
    #[error("unsupported database scheme '{0}', expected sqlite")]
    UnsupportedScheme(String),

    /// The listen address is not a socket address.
    #[error("invalid bind address '{value}': {reason}")]
    InvalidBindAddress {
        /// Rejected input.
        value: String,
        /// Parser message.
        reason: String,
    },

    /// The connection pool would hold no connections.
    #[error("database pool size must be at least 1")]
    ZeroPoolSize,
}

impl From<DatabaseUrlError> for ConfigError {
    fn from(err: DatabaseUrlError) -> Self {
        match err {
            DatabaseUrlError::Empty => Self::EmptyDatabaseUrl,
            DatabaseUrlError::UnsupportedScheme(scheme) => Self::UnsupportedScheme(scheme),
        }
    }
}

/// Validated service settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Storage connection string.
    pub database_url: DatabaseUrl,
    /// Address the HTTP listener binds to.
    pub bind_address: SocketAddr,
    /// Maximum number of pooled database connections.
    pub pool_size: u32,
    /// Default `tracing` filter directive.
    pub log_filter: String,
}

impl Settings {
    /// Validates raw setting values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the database URL, bind address or pool
    /// size is rejected.
    pub fn new(
        database_url: &str,
        bind_address: &str,
        pool_size: u32,
        log_filter: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let parsed_url = DatabaseUrl::parse(database_url)?;
        let parsed_address =
            bind_address
                .trim()
                .parse::<SocketAddr>()
                .map_err(|err| ConfigError::InvalidBindAddress {
                    value: bind_address.to_owned(),
                    reason: err.to_string(),
                })?;
        if pool_size == 0 {
            return Err(ConfigError::ZeroPoolSize);
        }

        Ok(Self {
            database_url: parsed_url,
            bind_address: parsed_address,
            pool_size,
            log_filter: log_filter.into(),
        })
    }

    /// Settings for a throwaway in-memory database on an ephemeral port.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            database_url: DatabaseUrl::in_memory(),
            bind_address: SocketAddr::from((Ipv4Addr::LOCALHOST, 0)),
            pool_size: 1,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}
