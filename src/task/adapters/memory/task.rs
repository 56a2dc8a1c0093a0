//! In-memory repository for tasks.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::paginate;
use crate::task::{
    domain::{Task, TaskId, TaskListId},
    ports::{Page, RepositoryError, RepositoryResult, TaskRepository},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    list_index: HashMap<TaskListId, Vec<TaskId>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn get(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(RepositoryError::lock_poisoned)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_by_task_list(
        &self,
        task_list_id: TaskListId,
        page: Page,
    ) -> RepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(RepositoryError::lock_poisoned)?;
        let mut tasks: Vec<&Task> = state
            .list_index
            .get(&task_list_id)
            .map(|ids| ids.iter().filter_map(|id| state.tasks.get(id)).collect())
            .unwrap_or_default();
        tasks.sort_by_key(|task| (task.created_at(), task.id()));
        Ok(paginate(tasks.into_iter().cloned(), page))
    }

    async fn create(&self, task: &Task) -> RepositoryResult<Task> {
        let mut state = self.state.write().map_err(RepositoryError::lock_poisoned)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(RepositoryError::DuplicateTask(task.id()));
        }
        state
            .list_index
            .entry(task.task_list_id())
            .or_default()
            .push(task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(task.clone())
    }

    async fn update(&self, task: &Task) -> RepositoryResult<Task> {
        let mut state = self.state.write().map_err(RepositoryError::lock_poisoned)?;
        let stored = state
            .tasks
            .get_mut(&task.id())
            .ok_or(RepositoryError::TaskNotFound(task.id()))?;
        *stored = task.clone();
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> RepositoryResult<bool> {
        let mut state = self.state.write().map_err(RepositoryError::lock_poisoned)?;
        let Some(removed) = state.tasks.remove(&id) else {
            return Ok(false);
        };
        if let Some(ids) = state.list_index.get_mut(&removed.task_list_id()) {
            ids.retain(|task_id| *task_id != id);
            if ids.is_empty() {
                state.list_index.remove(&removed.task_list_id());
            }
        }
        Ok(true)
    }
}
