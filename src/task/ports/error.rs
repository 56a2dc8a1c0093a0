//! Errors shared by task list and task repository implementations.

use crate::task::domain::{ErrorKind, TaskId, TaskListId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors returned by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// No task list with the identifier exists.
    #[error("task list not found: {0}")]
    TaskListNotFound(TaskListId),

    /// No task with the identifier exists.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// A task list with the same identifier already exists.
    #[error("duplicate task list identifier: {0}")]
    DuplicateTaskList(TaskListId),

    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The storage engine rejected a task referencing a missing task list.
    #[error("task list does not exist: {0}")]
    UnknownTaskList(TaskListId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),

    /// The unit of work was already committed or rolled back.
    #[error("unit of work is already closed")]
    UnitOfWorkClosed,
}

impl RepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Maps a poisoned lock into a persistence error.
    pub(crate) fn lock_poisoned(err: impl std::fmt::Display) -> Self {
        Self::persistence(std::io::Error::other(err.to_string()))
    }

    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TaskListNotFound(_) | Self::TaskNotFound(_) | Self::UnknownTaskList(_) => {
                ErrorKind::NotFound
            }
            Self::DuplicateTaskList(_) | Self::DuplicateTask(_) => ErrorKind::Conflict,
            Self::InvalidPersistedData(_) | Self::Persistence(_) | Self::UnitOfWorkClosed => {
                ErrorKind::Storage
            }
        }
    }
}
