//! Use cases for task lists.

use super::PageRequest;
use crate::task::{
    domain::{TaskList, TaskListId},
    ports::TaskListRepository,
    services::{TaskListService, TaskListServiceResult},
};
use mockable::Clock;

/// Request payload for creating a task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskListRequest {
    name: String,
}

impl CreateTaskListRequest {
    /// Creates a request for a list with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Request payload for renaming a task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameTaskListRequest {
    task_list_id: TaskListId,
    name: String,
}

impl RenameTaskListRequest {
    /// Creates a rename request.
    #[must_use]
    pub fn new(task_list_id: TaskListId, name: impl Into<String>) -> Self {
        Self {
            task_list_id,
            name: name.into(),
        }
    }
}

/// Application entry points for task lists.
#[derive(Clone)]
pub struct TaskListUseCases<R, C>
where
    R: TaskListRepository,
    C: Clock + Send + Sync,
{
    service: TaskListService<R, C>,
}

impl<R, C> TaskListUseCases<R, C>
where
    R: TaskListRepository,
    C: Clock + Send + Sync,
{
    /// Wraps a task list service.
    #[must_use]
    pub const fn new(service: TaskListService<R, C>) -> Self {
        Self { service }
    }

    /// Creates a task list.
    ///
    /// # Errors
    ///
    /// Propagates [`TaskListService::create`] failures.
    pub async fn create(&self, request: CreateTaskListRequest) -> TaskListServiceResult<TaskList> {
        self.service.create(request.name).await
    }

    /// Lists task lists, defaulting to offset 0 and limit 100.
    ///
    /// # Errors
    ///
    /// Propagates [`TaskListService::list`] failures.
    pub async fn list(&self, page: PageRequest) -> TaskListServiceResult<Vec<TaskList>> {
        self.service.list(page.resolve()).await
    }

    /// Finds a task list by identifier.
    ///
    /// # Errors
    ///
    /// Propagates [`TaskListService::get`] failures.
    pub async fn get(&self, task_list_id: TaskListId) -> TaskListServiceResult<Option<TaskList>> {
        self.service.get(task_list_id).await
    }

    /// Renames a task list.
    ///
    /// # Errors
    ///
    /// Propagates [`TaskListService::rename`] failures.
    pub async fn rename(&self, request: RenameTaskListRequest) -> TaskListServiceResult<TaskList> {
        self.service
            .rename(request.task_list_id, request.name)
            .await
    }

    /// Deletes a task list, returning whether it existed.
    ///
    /// # Errors
    ///
    /// Propagates [`TaskListService::delete`] failures.
    pub async fn delete(&self, task_list_id: TaskListId) -> TaskListServiceResult<bool> {
        self.service.delete(task_list_id).await
    }
}
