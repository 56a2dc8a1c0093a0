//! Use cases for tasks.

use super::PageRequest;
use crate::task::{
    domain::{Task, TaskId, TaskListId},
    ports::TaskRepository,
    services::{TaskService, TaskServiceResult},
};
use mockable::Clock;

/// Request payload for adding a task to a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskRequest {
    task_list_id: TaskListId,
    title: String,
    description: Option<String>,
}

impl AddTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(task_list_id: TaskListId, title: impl Into<String>) -> Self {
        Self {
            task_list_id,
            title: title.into(),
            description: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets or clears the task description.
    #[must_use]
    pub fn with_optional_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}

/// Request payload for listing the tasks of one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListTasksRequest {
    task_list_id: TaskListId,
    page: PageRequest,
}

impl ListTasksRequest {
    /// Creates a request for the first page of a list.
    #[must_use]
    pub fn new(task_list_id: TaskListId) -> Self {
        Self {
            task_list_id,
            page: PageRequest::default(),
        }
    }

    /// Sets the page window.
    #[must_use]
    pub const fn with_page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }
}

/// Application entry points for tasks.
#[derive(Clone)]
pub struct TaskUseCases<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    service: TaskService<R, C>,
}

impl<R, C> TaskUseCases<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Wraps a task service.
    #[must_use]
    pub const fn new(service: TaskService<R, C>) -> Self {
        Self { service }
    }

    /// Adds a task to a list.
    ///
    /// # Errors
    ///
    /// Propagates [`TaskService::add`] failures.
    pub async fn add(&self, request: AddTaskRequest) -> TaskServiceResult<Task> {
        self.service
            .add(request.task_list_id, request.title, request.description)
            .await
    }

    /// Completes a task.
    ///
    /// # Errors
    ///
    /// Propagates [`TaskService::complete`] failures.
    pub async fn complete(&self, task_id: TaskId) -> TaskServiceResult<Task> {
        self.service.complete(task_id).await
    }

    /// Lists the tasks of one list, defaulting to offset 0 and limit 100.
    ///
    /// # Errors
    ///
    /// Propagates [`TaskService::list`] failures.
    pub async fn list(&self, request: ListTasksRequest) -> TaskServiceResult<Vec<Task>> {
        self.service
            .list(request.task_list_id, request.page.resolve())
            .await
    }

    /// Finds a task by identifier.
    ///
    /// # Errors
    ///
    /// Propagates [`TaskService::get`] failures.
    pub async fn get(&self, task_id: TaskId) -> TaskServiceResult<Option<Task>> {
        self.service.get(task_id).await
    }

    /// Deletes a task, returning whether it existed.
    ///
    /// # Errors
    ///
    /// Propagates [`TaskService::delete`] failures.
    pub async fn delete(&self, task_id: TaskId) -> TaskServiceResult<bool> {
        self.service.delete(task_id).await
    }
}
