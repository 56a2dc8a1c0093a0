//! `SQLite` repository implementation for tasks.

use super::{
    UnitOfWork,
    models::{NewTaskRow, TaskChanges, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{
        PersistedTaskData, Task, TaskDescription, TaskId, TaskListId, TaskTitle,
    },
    ports::{Page, RepositoryError, RepositoryResult, TaskRepository},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use mockable::{Clock, DefaultClock};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// `SQLite`-backed task repository bound to one unit of work.
///
/// The schema cascades list deletion to tasks and rejects tasks whose list
/// does not exist. The clock stamps completed rows that arrive without a
/// completion time.
pub struct SqliteTaskRepository<C = DefaultClock>
where
    C: Clock + Send + Sync + 'static,
{
    unit_of_work: UnitOfWork,
    clock: Arc<C>,
}

impl<C> SqliteTaskRepository<C>
where
    C: Clock + Send + Sync + 'static,
{
    /// Creates a repository that reads and writes through `unit_of_work`.
    #[must_use]
    pub const fn new(unit_of_work: UnitOfWork, clock: Arc<C>) -> Self {
        Self {
            unit_of_work,
            clock,
        }
    }
}

impl<C> Clone for SqliteTaskRepository<C>
where
    C: Clock + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            unit_of_work: self.unit_of_work.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> fmt::Debug for SqliteTaskRepository<C>
where
    C: Clock + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteTaskRepository")
            .field("unit_of_work", &self.unit_of_work)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<C> TaskRepository for SqliteTaskRepository<C>
where
    C: Clock + Send + Sync + 'static,
{
    async fn get(&self, id: TaskId) -> RepositoryResult<Option<Task>> {
        let clock = Arc::clone(&self.clock);
        self.unit_of_work
            .execute(move |connection| {
                find_task_row(connection, id)?
                    .map(|row| row_to_task(row, &*clock))
                    .transpose()
            })
            .await
    }

    async fn list_by_task_list(
        &self,
        task_list_id: TaskListId,
        page: Page,
    ) -> RepositoryResult<Vec<Task>> {
        let clock = Arc::clone(&self.clock);
        self.unit_of_work
            .execute(move |connection| {
                let rows = tasks::table
                    .filter(tasks::task_list_id.eq(task_list_id.to_string()))
                    .select(TaskRow::as_select())
                    .order((tasks::created_at.asc(), tasks::id.asc()))
                    .limit(i64::from(page.limit()))
                    .offset(i64::from(page.offset()))
                    .load::<TaskRow>(connection)
                    .map_err(RepositoryError::persistence)?;
                rows.into_iter()
                    .map(|row| row_to_task(row, &*clock))
                    .collect()
            })
            .await
    }

    async fn create(&self, task: &Task) -> RepositoryResult<Task> {
        let task_id = task.id();
        let task_list_id = task.task_list_id();
        let new_row = to_new_row(task);
        let clock = Arc::clone(&self.clock);

        self.unit_of_work
            .execute(move |connection| {
                diesel::insert_into(tasks::table)
                    .values(&new_row)
                    .execute(connection)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            RepositoryError::DuplicateTask(task_id)
                        }
                        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                            RepositoryError::UnknownTaskList(task_list_id)
                        }
                        DieselError::DatabaseError(_, ref info)
                            if is_foreign_key_violation(info.as_ref()) =>
                        {
                            RepositoryError::UnknownTaskList(task_list_id)
                        }
                        _ => RepositoryError::persistence(err),
                    })?;
                load_task(connection, task_id, &*clock)
            })
            .await
    }

    async fn update(&self, task: &Task) -> RepositoryResult<Task> {
        let id = task.id();
        let changes = TaskChanges {
            title: task.title().as_str().to_owned(),
            description: task.description().map(|text| text.as_str().to_owned()),
            is_completed: task.is_completed(),
            completed_at: task.completed_at().map(|timestamp| timestamp.naive_utc()),
        };
        let clock = Arc::clone(&self.clock);

        self.unit_of_work
            .execute(move |connection| {
                let updated = diesel::update(tasks::table.find(id.to_string()))
                    .set(&changes)
                    .execute(connection)
                    .map_err(RepositoryError::persistence)?;
                if updated == 0 {
                    return Err(RepositoryError::TaskNotFound(id));
                }
                load_task(connection, id, &*clock)
            })
            .await
    }

    async fn delete(&self, id: TaskId) -> RepositoryResult<bool> {
        self.unit_of_work
            .execute(move |connection| {
                let removed = diesel::delete(tasks::table.find(id.to_string()))
                    .execute(connection)
                    .map_err(RepositoryError::persistence)?;
                Ok(removed > 0)
            })
            .await
    }
}

fn find_task_row(
    connection: &mut SqliteConnection,
    id: TaskId,
) -> RepositoryResult<Option<TaskRow>> {
    tasks::table
        .filter(tasks::id.eq(id.to_string()))
        .select(TaskRow::as_select())
        .first::<TaskRow>(connection)
        .optional()
        .map_err(RepositoryError::persistence)
}

/// Re-reads a row written in the current transaction.
fn load_task(
    connection: &mut SqliteConnection,
    id: TaskId,
    clock: &impl Clock,
) -> RepositoryResult<Task> {
    let row = find_task_row(connection, id)?.ok_or(RepositoryError::TaskNotFound(id))?;
    row_to_task(row, clock)
}

fn is_foreign_key_violation(info: &dyn DatabaseErrorInformation) -> bool {
    info.message().contains("FOREIGN KEY constraint failed")
}

fn to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().to_string(),
        task_list_id: task.task_list_id().to_string(),
        title: task.title().as_str().to_owned(),
        description: task.description().map(|text| text.as_str().to_owned()),
        is_completed: task.is_completed(),
        created_at: task.created_at().naive_utc(),
        completed_at: task.completed_at().map(|timestamp| timestamp.naive_utc()),
    }
}

pub(super) fn row_to_task(row: TaskRow, clock: &impl Clock) -> RepositoryResult<Task> {
    let TaskRow {
        id: persisted_id,
        task_list_id: persisted_task_list_id,
        title: persisted_title,
        description: persisted_description,
        is_completed,
        created_at,
        completed_at,
    } = row;

    let id = Uuid::parse_str(&persisted_id).map_err(RepositoryError::invalid_persisted_data)?;
    let task_list_id = Uuid::parse_str(&persisted_task_list_id)
        .map_err(RepositoryError::invalid_persisted_data)?;
    let title = TaskTitle::new(persisted_title).map_err(RepositoryError::invalid_persisted_data)?;
    let description = persisted_description
        .map(TaskDescription::new)
        .transpose()
        .map_err(RepositoryError::invalid_persisted_data)?;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        task_list_id: TaskListId::from_uuid(task_list_id),
        title,
        description,
        is_completed,
        created_at: created_at.and_utc(),
        completed_at: completed_at.map(|timestamp| timestamp.and_utc()),
    };
    Ok(Task::from_persisted(data, clock))
}
