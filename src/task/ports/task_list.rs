//! Repository port for task list persistence.

use super::{Page, RepositoryResult};
use crate::task::domain::{TaskList, TaskListId};
use async_trait::async_trait;

/// Task list persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskListRepository: Send + Sync {
    /// Finds a task list by identifier.
    ///
    /// Returns `None` when the task list does not exist.
    async fn get(&self, id: TaskListId) -> RepositoryResult<Option<TaskList>>;

    /// Returns a page of task lists in stable order.
    async fn list(&self, page: Page) -> RepositoryResult<Vec<TaskList>>;

    /// Stores a new task list and returns it as persisted.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::DuplicateTaskList`] when the identifier
    /// already exists.
    ///
    /// [`RepositoryError::DuplicateTaskList`]: super::RepositoryError::DuplicateTaskList
    async fn create(&self, task_list: &TaskList) -> RepositoryResult<TaskList>;

    /// Overwrites the mutable fields of an existing task list.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::TaskListNotFound`] when no record matches.
    ///
    /// [`RepositoryError::TaskListNotFound`]: super::RepositoryError::TaskListNotFound
    async fn update(&self, task_list: &TaskList) -> RepositoryResult<TaskList>;

    /// Removes a task list.
    ///
    /// Returns `false`, not an error, when no record matched.
    async fn delete(&self, id: TaskListId) -> RepositoryResult<bool>;
}
