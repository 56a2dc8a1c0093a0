//! Transaction scope shared by the repositories serving one request.

use std::fmt;
use std::sync::{Arc, Mutex};

use diesel::SqliteConnection;
use diesel::connection::{AnsiTransactionManager, TransactionManager};

use super::SqlitePool;
use super::blocking::{PooledConn, run_blocking};
use crate::task::ports::{RepositoryError, RepositoryResult};

/// One pooled connection holding one open transaction.
///
/// Clones share the same transaction, so every repository built from a unit
/// of work sees the writes of the others. The transaction ends with exactly
/// one of [`commit`](Self::commit) or [`rollback`](Self::rollback); a unit of
/// work dropped while still open is rolled back.
#[derive(Clone)]
pub struct UnitOfWork {
    slot: Arc<Mutex<TransactionSlot>>,
}

#[derive(Clone, Copy)]
enum Outcome {
    Commit,
    Rollback,
}

struct TransactionSlot {
    connection: Option<PooledConn>,
}

impl UnitOfWork {
    /// Checks a connection out of the pool and opens a transaction on it.
    ///
    /// The transaction takes the write lock immediately so concurrent units
    /// of work queue on the busy timeout instead of failing on upgrade.
    pub(super) async fn begin(pool: SqlitePool) -> RepositoryResult<Self> {
        let connection = run_blocking(move || {
            let mut connection = pool.get().map_err(RepositoryError::persistence)?;
            AnsiTransactionManager::begin_transaction_sql(&mut *connection, "BEGIN IMMEDIATE")
                .map_err(RepositoryError::persistence)?;
            Ok(connection)
        })
        .await?;

        tracing::trace!("unit of work started");
        Ok(Self {
            slot: Arc::new(Mutex::new(TransactionSlot {
                connection: Some(connection),
            })),
        })
    }

    /// Runs `operation` against the transaction's connection.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::UnitOfWorkClosed`] after commit or rollback,
    /// and whatever error `operation` produces.
    pub async fn execute<F, T>(&self, operation: F) -> RepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> RepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let slot = Arc::clone(&self.slot);
        run_blocking(move || {
            let mut guard = slot.lock().map_err(RepositoryError::lock_poisoned)?;
            let connection = guard
                .connection
                .as_mut()
                .ok_or(RepositoryError::UnitOfWorkClosed)?;
            operation(&mut **connection)
        })
        .await
    }

    /// Commits the transaction and returns the connection to the pool.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::UnitOfWorkClosed`] when the transaction was
    /// already finished, or a persistence error when `COMMIT` fails.
    pub async fn commit(self) -> RepositoryResult<()> {
        self.finish(Outcome::Commit).await
    }

    /// Discards every write made through this unit of work.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::UnitOfWorkClosed`] when the transaction was
    /// already finished, or a persistence error when `ROLLBACK` fails.
    pub async fn rollback(self) -> RepositoryResult<()> {
        self.finish(Outcome::Rollback).await
    }

    /// Returns whether the transaction is still open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.slot
            .lock()
            .is_ok_and(|guard| guard.connection.is_some())
    }

    async fn finish(self, outcome: Outcome) -> RepositoryResult<()> {
        let slot = self.slot;
        run_blocking(move || {
            let mut connection = {
                let mut guard = slot.lock().map_err(RepositoryError::lock_poisoned)?;
                guard
                    .connection
                    .take()
                    .ok_or(RepositoryError::UnitOfWorkClosed)?
            };
            match outcome {
                Outcome::Commit => AnsiTransactionManager::commit_transaction(&mut *connection),
                Outcome::Rollback => AnsiTransactionManager::rollback_transaction(&mut *connection),
            }
            .map_err(RepositoryError::persistence)
        })
        .await?;

        match outcome {
            Outcome::Commit => tracing::trace!("unit of work committed"),
            Outcome::Rollback => tracing::debug!("unit of work rolled back"),
        }
        Ok(())
    }
}

impl fmt::Debug for UnitOfWork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitOfWork")
            .field("open", &self.is_open())
            .finish_non_exhaustive()
    }
}

impl Drop for TransactionSlot {
    fn drop(&mut self) {
        let Some(mut connection) = self.connection.take() else {
            return;
        };
        match AnsiTransactionManager::rollback_transaction(&mut *connection) {
            Ok(()) => tracing::debug!("rolled back abandoned unit of work"),
            Err(err) => tracing::warn!(error = %err, "failed to roll back abandoned unit of work"),
        }
    }
}
