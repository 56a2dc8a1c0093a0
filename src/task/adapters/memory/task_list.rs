//! In-memory repository for task lists.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::paginate;
use crate::task::{
    domain::{TaskList, TaskListId},
    ports::{Page, RepositoryError, RepositoryResult, TaskListRepository},
};

/// Thread-safe in-memory task list repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskListRepository {
    state: Arc<RwLock<HashMap<TaskListId, TaskList>>>,
}

impl InMemoryTaskListRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskListRepository for InMemoryTaskListRepository {
    async fn get(&self, id: TaskListId) -> RepositoryResult<Option<TaskList>> {
        let state = self.state.read().map_err(RepositoryError::lock_poisoned)?;
        Ok(state.get(&id).cloned())
    }

    async fn list(&self, page: Page) -> RepositoryResult<Vec<TaskList>> {
        let state = self.state.read().map_err(RepositoryError::lock_poisoned)?;
        let mut task_lists: Vec<&TaskList> = state.values().collect();
        task_lists.sort_by_key(|task_list| (task_list.created_at(), task_list.id()));
        Ok(paginate(task_lists.into_iter().cloned(), page))
    }

    async fn create(&self, task_list: &TaskList) -> RepositoryResult<TaskList> {
        let mut state = self.state.write().map_err(RepositoryError::lock_poisoned)?;
        if state.contains_key(&task_list.id()) {
            return Err(RepositoryError::DuplicateTaskList(task_list.id()));
        }
        state.insert(task_list.id(), task_list.clone());
        Ok(task_list.clone())
    }

    async fn update(&self, task_list: &TaskList) -> RepositoryResult<TaskList> {
        let mut state = self.state.write().map_err(RepositoryError::lock_poisoned)?;
        let stored = state
            .get_mut(&task_list.id())
            .ok_or(RepositoryError::TaskListNotFound(task_list.id()))?;
        *stored = task_list.clone();
        Ok(task_list.clone())
    }

    async fn delete(&self, id: TaskListId) -> RepositoryResult<bool> {
        let mut state = self.state.write().map_err(RepositoryError::lock_poisoned)?;
        Ok(state.remove(&id).is_some())
    }
}
