//! Service layer for task list creation, lookup, renaming, and removal.

use crate::task::{
    domain::{ErrorKind, TaskDomainError, TaskList, TaskListId},
    ports::{Page, RepositoryError, TaskListRepository},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task list operations.
#[derive(Debug, Error)]
pub enum TaskListServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    /// The referenced task list does not exist.
    #[error("task list not found: {0}")]
    NotFound(TaskListId),
}

impl TaskListServiceError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(err) => err.kind(),
            Self::Repository(err) => err.kind(),
            Self::NotFound(_) => ErrorKind::NotFound,
        }
    }
}

/// Result type for task list service operations.
pub type TaskListServiceResult<T> = Result<T, TaskListServiceError>;

/// Task list orchestration service.
#[derive(Clone)]
pub struct TaskListService<R, C>
where
    R: TaskListRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskListService<R, C>
where
    R: TaskListRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task list service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and stores a task list stamped with the current UTC time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::Domain`] when the name is invalid or
    /// [`TaskListServiceError::Repository`] when persistence fails.
    pub async fn create(&self, name: impl Into<String>) -> TaskListServiceResult<TaskList> {
        let task_list = TaskList::new(name, &*self.clock)?;
        let stored = self.repository.create(&task_list).await?;
        tracing::info!(task_list_id = %stored.id(), "created task list");
        Ok(stored)
    }

    /// Returns a page of task lists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::Repository`] when the lookup fails.
    pub async fn list(&self, page: Page) -> TaskListServiceResult<Vec<TaskList>> {
        Ok(self.repository.list(page).await?)
    }

    /// Finds a task list by identifier.
    ///
    /// Returns `Ok(None)` when the task list does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::Repository`] when the lookup fails.
    pub async fn get(&self, id: TaskListId) -> TaskListServiceResult<Option<TaskList>> {
        Ok(self.repository.get(id).await?)
    }

    /// Renames an existing task list.
    ///
    /// Nothing is written when the new name is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::NotFound`] when the list does not
    /// exist, [`TaskListServiceError::Domain`] when the name is blank or too
    /// long, or [`TaskListServiceError::Repository`] when persistence fails.
    pub async fn rename(
        &self,
        id: TaskListId,
        new_name: impl Into<String>,
    ) -> TaskListServiceResult<TaskList> {
        let mut task_list = self
            .repository
            .get(id)
            .await?
            .ok_or(TaskListServiceError::NotFound(id))?;
        task_list.rename(new_name, &*self.clock)?;
        let stored = self.repository.update(&task_list).await?;
        tracing::info!(task_list_id = %id, "renamed task list");
        Ok(stored)
    }

    /// Removes a task list, returning whether it existed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListServiceError::Repository`] when persistence fails.
    pub async fn delete(&self, id: TaskListId) -> TaskListServiceResult<bool> {
        let removed = self.repository.delete(id).await?;
        if removed {
            tracing::info!(task_list_id = %id, "deleted task list");
        }
        Ok(removed)
    }
}
