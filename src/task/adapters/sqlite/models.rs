//! Diesel row models for task list and task persistence.

use super::schema::{task_lists, tasks};
use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Query result row for task list records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = task_lists)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskListRow {
    /// Task list identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Latest rename timestamp.
    pub updated_at: Option<NaiveDateTime>,
}

/// Insert model for task list records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = task_lists)]
pub struct NewTaskListRow {
    /// Task list identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Latest rename timestamp.
    pub updated_at: Option<NaiveDateTime>,
}

/// Mutable task list columns written by updates.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = task_lists)]
#[diesel(treat_none_as_null = true)]
pub struct TaskListChanges {
    /// Display name.
    pub name: String,
    /// Latest rename timestamp.
    pub updated_at: Option<NaiveDateTime>,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    /// Task identifier.
    pub id: String,
    /// Owning task list identifier.
    pub task_list_id: String,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Completion flag.
    pub is_completed: bool,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Completion timestamp.
    pub completed_at: Option<NaiveDateTime>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: String,
    /// Owning task list identifier.
    pub task_list_id: String,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Completion flag.
    pub is_completed: bool,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Completion timestamp.
    pub completed_at: Option<NaiveDateTime>,
}

/// Mutable task columns written by updates.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChanges {
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Completion flag.
    pub is_completed: bool,
    /// Completion timestamp.
    pub completed_at: Option<NaiveDateTime>,
}
