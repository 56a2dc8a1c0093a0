//! Connection pool, schema bootstrap and transaction scoping.

use std::future::Future;
use std::time::Duration;

use diesel::SqliteConnection;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError};
use thiserror::Error;

use super::{DatabaseUrl, UnitOfWork};
use crate::task::ports::{RepositoryError, RepositoryResult};

/// `SQLite` connection pool type used by the task adapters.
pub(super) type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Schema applied by [`Database::initialise_schema`].
const SCHEMA_SQL: &str = include_str!(
    "../../../../migrations/2026-10-19-000000_create_task_lists_and_tasks/up.sql"
);

/// How long a connection waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors raised while opening or preparing the database.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The connection pool could not be built or a connection checked out.
    #[error("database connection failed: {0}")]
    Pool(#[from] PoolError),

    /// The schema statements failed.
    #[error("failed to apply database schema: {0}")]
    Schema(#[source] diesel::result::Error),
}

/// Pragmas applied to every connection handed out by the pool.
#[derive(Debug, Clone, Copy)]
struct ConnectionPragmas {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, connection: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        let statements = format!(
            "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        );
        connection
            .batch_execute(&statements)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Handle on the task database.
///
/// Cloning is cheap; clones share the pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens a connection pool for `url`.
    ///
    /// In-memory databases are private to their connection, so they get a
    /// single connection that is never recycled.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::Pool`] when no connection can be established.
    pub fn connect(url: &DatabaseUrl, pool_size: u32) -> Result<Self, DatabaseError> {
        let manager = ConnectionManager::<SqliteConnection>::new(url.connection_string());
        let pragmas = Box::new(ConnectionPragmas {
            busy_timeout: BUSY_TIMEOUT,
        });
        let sized = if url.is_in_memory() {
            SqlitePool::builder()
                .max_size(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePool::builder().max_size(pool_size.max(1))
        };
        let pool = sized.connection_customizer(pragmas).build(manager)?;

        tracing::info!(database = %url, "database pool ready");
        Ok(Self { pool })
    }

    /// Creates the tables and indexes when they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::Schema`] when a statement fails.
    pub fn initialise_schema(&self) -> Result<(), DatabaseError> {
        let mut connection = self.pool.get()?;
        connection
            .batch_execute(SCHEMA_SQL)
            .map_err(DatabaseError::Schema)?;
        tracing::debug!("database schema ready");
        Ok(())
    }

    /// Opens a new unit of work.
    ///
    /// # Errors
    ///
    /// Returns a persistence error when no connection is available or the
    /// transaction cannot start.
    pub async fn begin(&self) -> RepositoryResult<UnitOfWork> {
        UnitOfWork::begin(self.pool.clone()).await
    }

    /// Runs `work` inside a fresh unit of work.
    ///
    /// The transaction commits when `work` succeeds and rolls back when it
    /// fails, in which case the original error is returned.
    ///
    /// # Errors
    ///
    /// Returns the error from `work`, or a repository error converted into
    /// `E` when the transaction cannot be opened or committed.
    pub async fn run<F, Fut, T, E>(&self, work: F) -> Result<T, E>
    where
        F: FnOnce(UnitOfWork) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<RepositoryError>,
    {
        let unit_of_work = self.begin().await?;
        match work(unit_of_work.clone()).await {
            Ok(value) => {
                unit_of_work.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = unit_of_work.rollback().await {
                    tracing::warn!(error = %rollback_err, "rollback after failed request failed");
                }
                Err(err)
            }
        }
    }
}
