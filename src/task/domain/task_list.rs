//! Task list aggregate.

use super::{TaskDomainError, TaskListId, TaskListName};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Named collection that tasks belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    id: TaskListId,
    name: TaskListName,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskListData {
    /// Persisted task list identifier.
    pub id: TaskListId,
    /// Persisted name.
    pub name: TaskListName,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted timestamp of the latest rename, if any.
    pub updated_at: Option<DateTime<Utc>>,
}

impl TaskList {
    /// Creates a new task list stamped with the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::Validation`] when the name is blank or
    /// longer than 120 characters.
    pub fn new(name: impl Into<String>, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let name = TaskListName::new(name)?;
        Ok(Self {
            id: TaskListId::new(),
            name,
            created_at: clock.utc(),
            updated_at: None,
        })
    }

    /// Reconstructs a task list from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskListData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task list identifier.
    #[must_use]
    pub const fn id(&self) -> TaskListId {
        self.id
    }

    /// Returns the task list name.
    #[must_use]
    pub const fn name(&self) -> &TaskListName {
        &self.name
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the latest rename, if any.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Renames the list and refreshes `updated_at`.
    ///
    /// The list is left untouched when the new name is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidArgument`] when the new name is empty
    /// or whitespace-only, and [`TaskDomainError::Validation`] when it exceeds
    /// 120 characters.
    pub fn rename(
        &mut self,
        new_name: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let raw = new_name.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::InvalidArgument(
                "name cannot be empty".to_owned(),
            ));
        }
        self.name = TaskListName::new(raw)?;
        self.updated_at = Some(clock.utc());
        Ok(())
    }
}
