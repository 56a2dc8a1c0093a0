//! Structured logging setup.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The fallback filter directive does not parse.
    #[error("invalid log filter '{filter}': {source}")]
    InvalidFilter {
        /// Rejected directive.
        filter: String,
        /// Parser failure.
        #[source]
        source: ParseError,
    },

    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Installs a compact `fmt` subscriber as the global default.
///
/// `RUST_LOG` takes precedence over `default_filter` when it is set and
/// parses.
///
/// # Errors
///
/// Returns [`TelemetryError`] when `default_filter` is invalid or a global
/// subscriber has already been installed.
pub fn init_tracing(default_filter: &str) -> Result<(), TelemetryError> {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = select_filter(from_env.as_deref(), default_filter)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| TelemetryError::Install(err.to_string()))
}

/// Picks the environment directive when it parses, else `default_filter`.
fn select_filter(
    from_env: Option<&str>,
    default_filter: &str,
) -> Result<EnvFilter, TelemetryError> {
    from_env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .map_or_else(
            || {
                EnvFilter::try_new(default_filter).map_err(|source| TelemetryError::InvalidFilter {
                    filter: default_filter.to_owned(),
                    source,
                })
            },
            Ok,
        )
}
