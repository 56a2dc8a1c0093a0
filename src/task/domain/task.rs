//! Task entity and its completion lifecycle.

use super::{TaskDescription, TaskDomainError, TaskId, TaskListId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Single unit of work inside a task list.
///
/// Completion is recorded as a single optional timestamp, so `is_completed()`
/// and `completed_at()` can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    task_list_id: TaskListId,
    title: TaskTitle,
    description: Option<TaskDescription>,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owning task list.
    pub task_list_id: TaskListId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<TaskDescription>,
    /// Persisted completion flag.
    pub is_completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new, incomplete task in the given list.
    ///
    /// The list is not checked for existence here; referential integrity
    /// belongs to the storage engine.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::Validation`] when the title is blank or too
    /// long, or when the description exceeds 1000 characters.
    pub fn new(
        task_list_id: TaskListId,
        title: impl Into<String>,
        description: Option<String>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let title = TaskTitle::new(title)?;
        let description = description.map(TaskDescription::new).transpose()?;
        Ok(Self {
            id: TaskId::new(),
            task_list_id,
            title,
            description,
            created_at: clock.utc(),
            completed_at: None,
        })
    }

    /// Reconstructs a task from persisted storage.
    ///
    /// The completion timestamp is re-derived from the completion flag: an
    /// incomplete task never keeps a timestamp, and a completed task without
    /// one is stamped with the current clock time.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData, clock: &impl Clock) -> Self {
        let completed_at = match (data.is_completed, data.completed_at) {
            (false, _) => None,
            (true, Some(timestamp)) => Some(timestamp),
            (true, None) => Some(clock.utc()),
        };

        Self {
            id: data.id,
            task_list_id: data.task_list_id,
            title: data.title,
            description: data.description,
            created_at: data.created_at,
            completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning task list identifier.
    #[must_use]
    pub const fn task_list_id(&self) -> TaskListId {
        self.task_list_id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&TaskDescription> {
        self.description.as_ref()
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, present only for completed tasks.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Marks the task as completed.
    ///
    /// Completing an already completed task keeps the original timestamp.
    /// Returns `true` when the call changed the task.
    pub fn mark_completed(&mut self, clock: &impl Clock) -> bool {
        if self.completed_at.is_some() {
            return false;
        }
        self.completed_at = Some(clock.utc());
        true
    }
}
