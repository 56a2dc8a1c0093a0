//! Domain model for task lists and tasks.
//!
//! Entities validate their own invariants and know nothing about storage or
//! transport. Time is always read from an injected [`mockable::Clock`].

mod error;
mod ids;
mod task;
mod task_list;
mod text;

pub use error::{ErrorKind, TaskDomainError, ValidationError};
pub use ids::{TaskId, TaskListId};
pub use task::{PersistedTaskData, Task};
pub use task_list::{PersistedTaskListData, TaskList};
pub use text::{TaskDescription, TaskListName, TaskTitle};
