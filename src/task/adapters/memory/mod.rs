//! In-memory repositories for tests and embedding.
//!
//! These adapters keep no referential integrity between lists and tasks.

mod task;
mod task_list;

pub use task::InMemoryTaskRepository;
pub use task_list::InMemoryTaskListRepository;

use crate::task::ports::Page;

/// Applies a page window to an already ordered sequence.
fn paginate<T>(items: impl Iterator<Item = T>, page: Page) -> Vec<T> {
    let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
    items.skip(offset).take(limit).collect()
}
