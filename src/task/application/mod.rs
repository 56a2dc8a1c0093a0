//! Application use cases.
//!
//! Thin orchestration that turns transport-agnostic requests into domain
//! service calls. Pagination defaults are applied here so transports can
//! pass through whatever the client omitted.

mod pagination;
mod task_lists;
mod tasks;

pub use pagination::PageRequest;
pub use task_lists::{CreateTaskListRequest, RenameTaskListRequest, TaskListUseCases};
pub use tasks::{AddTaskRequest, ListTasksRequest, TaskUseCases};
