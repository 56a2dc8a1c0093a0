//! Service layer for adding, completing, listing, and removing tasks.

use crate::task::{
    domain::{ErrorKind, Task, TaskDomainError, TaskId, TaskListId},
    ports::{Page, RepositoryError, TaskRepository},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

impl TaskServiceError {
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

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and stores a task in the given list.
    ///
    /// The list is not looked up first. A missing list is reported by the
    /// storage engine as [`RepositoryError::UnknownTaskList`] when it enforces
    /// the foreign key.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Domain`] when the title or description is
    /// invalid, or [`TaskServiceError::Repository`] when persistence fails.
    pub async fn add(
        &self,
        task_list_id: TaskListId,
        title: impl Into<String>,
        description: Option<String>,
    ) -> TaskServiceResult<Task> {
        let task = Task::new(task_list_id, title, description, &*self.clock)?;
        let stored = self.repository.create(&task).await?;
        tracing::info!(task_id = %stored.id(), task_list_id = %task_list_id, "added task");
        Ok(stored)
    }

    /// Marks a task as completed and persists the change.
    ///
    /// Completing an already completed task is a no-op that keeps the
    /// original completion timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when the task does not exist or
    /// [`TaskServiceError::Repository`] when persistence fails.
    pub async fn complete(&self, task_id: TaskId) -> TaskServiceResult<Task> {
        let mut task = self
            .repository
            .get(task_id)
            .await?
            .ok_or(TaskServiceError::NotFound(task_id))?;
        if task.mark_completed(&*self.clock) {
            tracing::info!(task_id = %task_id, "completed task");
        } else {
            tracing::debug!(task_id = %task_id, "task already completed");
        }
        Ok(self.repository.update(&task).await?)
    }

    /// Returns a page of the tasks in one list.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn list(
        &self,
        task_list_id: TaskListId,
        page: Page,
    ) -> TaskServiceResult<Vec<Task>> {
        Ok(self
            .repository
            .list_by_task_list(task_list_id, page)
            .await?)
    }

    /// Finds a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn get(&self, task_id: TaskId) -> TaskServiceResult<Option<Task>> {
        Ok(self.repository.get(task_id).await?)
    }

    /// Removes a task, returning whether it existed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence fails.
    pub async fn delete(&self, task_id: TaskId) -> TaskServiceResult<bool> {
        let removed = self.repository.delete(task_id).await?;
        if removed {
            tracing::info!(task_id = %task_id, "deleted task");
        }
        Ok(removed)
    }
}
