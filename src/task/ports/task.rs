//! Repository port for task persistence.

use super::{Page, RepositoryResult};
use crate::task::domain::{Task, TaskId, TaskListId};
use async_trait::async_trait;

/// Task persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn get(&self, id: TaskId) -> RepositoryResult<Option<Task>>;

    /// Returns a page of the tasks belonging to one task list, in stable
    /// order.
    async fn list_by_task_list(
        &self,
        task_list_id: TaskListId,
        page: Page,
    ) -> RepositoryResult<Vec<Task>>;

    /// Stores a new task and returns it as persisted.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateTask`] when the identifier already
    /// exists, or [`RepositoryError::UnknownTaskList`] when the storage engine
    /// enforces referential integrity and the list is missing.
    ///
    /// [`RepositoryError::DuplicateTask`]: super::RepositoryError::DuplicateTask
    /// [`RepositoryError::UnknownTaskList`]: super::RepositoryError::UnknownTaskList
    async fn create(&self, task: &Task) -> RepositoryResult<Task>;

    /// Overwrites the mutable fields of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::TaskNotFound`] when no record matches.
    ///
    /// [`RepositoryError::TaskNotFound`]: super::RepositoryError::TaskNotFound
    async fn update(&self, task: &Task) -> RepositoryResult<Task>;

    /// Removes a task.
    ///
    /// Returns `false`, not an error, when no record matched.
    async fn delete(&self, id: TaskId) -> RepositoryResult<bool>;
}
