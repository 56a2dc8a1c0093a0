//! Domain services enforcing business rules atop the repository ports.

mod task;
mod task_list;

pub use task::{TaskService, TaskServiceError, TaskServiceResult};
pub use task_list::{TaskListService, TaskListServiceError, TaskListServiceResult};
