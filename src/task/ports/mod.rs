//! Port contracts for task list and task persistence.
//!
//! Ports define storage-agnostic interfaces used by the domain services.

mod error;
mod page;
mod task;
mod task_list;

pub use error::{RepositoryError, RepositoryResult};
pub use page::Page;
pub use task::TaskRepository;
pub use task_list::TaskListRepository;

#[cfg(test)]
pub use task::MockTaskRepository;
#[cfg(test)]
pub use task_list::MockTaskListRepository;
