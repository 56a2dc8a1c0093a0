//! Request and response bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::domain::{Task, TaskId, TaskList, TaskListId};

/// Body of task list create and rename requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskListIn {
    /// Requested list name.
    pub name: String,
}

/// Task list as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListOut {
    /// List identifier.
    pub id: TaskListId,
    /// List name.
    pub name: String,
}

impl From<TaskList> for TaskListOut {
    fn from(task_list: TaskList) -> Self {
        Self {
            id: task_list.id(),
            name: task_list.name().as_str().to_owned(),
        }
    }
}

/// Body of a task create request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskIn {
    /// List the task is added to.
    pub task_list_id: TaskListId,
    /// Task title.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Task as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskOut {
    /// Task identifier.
    pub id: TaskId,
    /// Owning list identifier.
    pub task_list_id: TaskListId,
    /// Task title.
    pub title: String,
    /// Task description, if any.
    pub description: Option<String>,
    /// Whether the task is completed.
    pub is_completed: bool,
    /// Completion time, present only for completed tasks.
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<Task> for TaskOut {
    fn from(task: Task) -> Self {
        Self {
            id: task.id(),
            task_list_id: task.task_list_id(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(|text| text.as_str().to_owned()),
            is_completed: task.is_completed(),
            completed_at: task.completed_at(),
        }
    }
}
