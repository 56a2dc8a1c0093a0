//! Parsing of the externally supplied database connection string.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors returned while parsing a database URL.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DatabaseUrlError {
    /// The URL is empty after trimming.
    #[error("database url must not be empty")]
    Empty,

    /// The URL names a storage backend this build cannot talk to.
    #[error("unsupported database scheme '{0}', expected sqlite")]
    UnsupportedScheme(String),
}

/// Location of an `SQLite` database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqliteTarget {
    /// Private in-memory database, discarded with its connection.
    Memory,
    /// File path or `file:` URI handed to `SQLite` unchanged.
    File(String),
}

/// Validated database connection string.
///
/// Accepted forms:
///
/// - `sqlite:///relative/path.db` and `sqlite:////absolute/path.db`
/// - `sqlite://path.db` and `sqlite:path.db`
/// - `sqlite://`, `sqlite::memory:` and `:memory:` for an in-memory database
/// - `file:` URIs and bare filesystem paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseUrl {
    raw: String,
    target: SqliteTarget,
}

impl DatabaseUrl {
    /// Parses a connection string.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseUrlError::Empty`] for blank input and
    /// [`DatabaseUrlError::UnsupportedScheme`] for URLs naming any backend
    /// other than `SQLite`.
    pub fn parse(value: &str) -> Result<Self, DatabaseUrlError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DatabaseUrlError::Empty);
        }

        let target = parse_target(trimmed)?;
        Ok(Self {
            raw: trimmed.to_owned(),
            target,
        })
    }

    /// Returns a URL for a private in-memory database.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            raw: "sqlite::memory:".to_owned(),
            target: SqliteTarget::Memory,
        }
    }

    /// Returns the connection string as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the resolved database location.
    #[must_use]
    pub const fn target(&self) -> &SqliteTarget {
        &self.target
    }

    /// Returns whether the database lives only in memory.
    #[must_use]
    pub const fn is_in_memory(&self) -> bool {
        matches!(self.target, SqliteTarget::Memory)
    }

    /// Returns the string passed to `SqliteConnection::establish`.
    pub(super) fn connection_string(&self) -> &str {
        match &self.target {
            SqliteTarget::Memory => ":memory:",
            SqliteTarget::File(path) => path,
        }
    }
}

fn parse_target(value: &str) -> Result<SqliteTarget, DatabaseUrlError> {
    if value == ":memory:" {
        return Ok(SqliteTarget::Memory);
    }

    if let Some(rest) = value.strip_prefix("sqlite://") {
        // One leading slash separates the empty authority from the path.
        let path = rest.strip_prefix('/').unwrap_or(rest);
        return Ok(file_or_memory(path));
    }

    if let Some(rest) = value.strip_prefix("sqlite:") {
        return Ok(file_or_memory(rest));
    }

    if value.starts_with("file:") {
        return Ok(SqliteTarget::File(value.to_owned()));
    }

    if let Some((scheme, _)) = value.split_once("://") {
        return Err(DatabaseUrlError::UnsupportedScheme(scheme.to_owned()));
    }

    Ok(SqliteTarget::File(value.to_owned()))
}

fn file_or_memory(path: &str) -> SqliteTarget {
    if path.is_empty() || path == ":memory:" {
        SqliteTarget::Memory
    } else {
        SqliteTarget::File(path.to_owned())
    }
}

impl FromStr for DatabaseUrl {
    type Err = DatabaseUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
