//! Blocking operation helpers for the `SQLite` adapters.
//!
//! Diesel connections are synchronous, so every statement is offloaded to
//! tokio's blocking pool to keep the async executor responsive.

use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, PooledConnection};

use crate::task::ports::{RepositoryError, RepositoryResult};

/// Pooled connection type for internal use.
pub(super) type PooledConn = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Runs a blocking database operation on a dedicated thread pool.
pub(super) async fn run_blocking<F, T>(f: F) -> RepositoryResult<T>
where
    F: FnOnce() -> RepositoryResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(RepositoryError::persistence)?
}
