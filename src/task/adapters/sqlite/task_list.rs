//! `SQLite` repository implementation for task lists.

use super::{
    UnitOfWork,
    models::{NewTaskListRow, TaskListChanges, TaskListRow},
    schema::task_lists,
};
use crate::task::{
    domain::{PersistedTaskListData, TaskList, TaskListId, TaskListName},
    ports::{Page, RepositoryError, RepositoryResult, TaskListRepository},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use uuid::Uuid;

/// `SQLite`-backed task list repository bound to one unit of work.
#[derive(Debug, Clone)]
pub struct SqliteTaskListRepository {
    unit_of_work: UnitOfWork,
}

impl SqliteTaskListRepository {
    /// Creates a repository that reads and writes through `unit_of_work`.
    #[must_use]
    pub const fn new(unit_of_work: UnitOfWork) -> Self {
        Self { unit_of_work }
    }
}

#[async_trait]
impl TaskListRepository for SqliteTaskListRepository {
    async fn get(&self, id: TaskListId) -> RepositoryResult<Option<TaskList>> {
        self.unit_of_work
            .execute(move |connection| {
                find_task_list_row(connection, id)?
                    .map(row_to_task_list)
                    .transpose()
            })
            .await
    }

    async fn list(&self, page: Page) -> RepositoryResult<Vec<TaskList>> {
        self.unit_of_work
            .execute(move |connection| {
                let rows = task_lists::table
                    .select(TaskListRow::as_select())
                    .order((task_lists::created_at.asc(), task_lists::id.asc()))
                    .limit(i64::from(page.limit()))
                    .offset(i64::from(page.offset()))
                    .load::<TaskListRow>(connection)
                    .map_err(RepositoryError::persistence)?;
                rows.into_iter().map(row_to_task_list).collect()
            })
            .await
    }

    async fn create(&self, task_list: &TaskList) -> RepositoryResult<TaskList> {
        let id = task_list.id();
        let new_row = to_new_row(task_list);

        self.unit_of_work
            .execute(move |connection| {
                diesel::insert_into(task_lists::table)
                    .values(&new_row)
                    .execute(connection)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            RepositoryError::DuplicateTaskList(id)
                        }
                        _ => RepositoryError::persistence(err),
                    })?;
                load_task_list(connection, id)
            })
            .await
    }

    async fn update(&self, task_list: &TaskList) -> RepositoryResult<TaskList> {
        let id = task_list.id();
        let changes = TaskListChanges {
            name: task_list.name().as_str().to_owned(),
            updated_at: task_list.updated_at().map(|timestamp| timestamp.naive_utc()),
        };

        self.unit_of_work
            .execute(move |connection| {
                let updated = diesel::update(task_lists::table.find(id.to_string()))
                    .set(&changes)
                    .execute(connection)
                    .map_err(RepositoryError::persistence)?;
                if updated == 0 {
                    return Err(RepositoryError::TaskListNotFound(id));
                }
                load_task_list(connection, id)
            })
            .await
    }

    async fn delete(&self, id: TaskListId) -> RepositoryResult<bool> {
        self.unit_of_work
            .execute(move |connection| {
                let removed = diesel::delete(task_lists::table.find(id.to_string()))
                    .execute(connection)
                    .map_err(RepositoryError::persistence)?;
                Ok(removed > 0)
            })
            .await
    }
}

fn find_task_list_row(
    connection: &mut SqliteConnection,
    id: TaskListId,
) -> RepositoryResult<Option<TaskListRow>> {
    task_lists::table
        .filter(task_lists::id.eq(id.to_string()))
        .select(TaskListRow::as_select())
        .first::<TaskListRow>(connection)
        .optional()
        .map_err(RepositoryError::persistence)
}

/// Re-reads a row written in the current transaction.
fn load_task_list(connection: &mut SqliteConnection, id: TaskListId) -> RepositoryResult<TaskList> {
    let row = find_task_list_row(connection, id)?.ok_or(RepositoryError::TaskListNotFound(id))?;
    row_to_task_list(row)
}

fn to_new_row(task_list: &TaskList) -> NewTaskListRow {
    NewTaskListRow {
        id: task_list.id().to_string(),
        name: task_list.name().as_str().to_owned(),
        created_at: task_list.created_at().naive_utc(),
        updated_at: task_list.updated_at().map(|timestamp| timestamp.naive_utc()),
    }
}

fn row_to_task_list(row: TaskListRow) -> RepositoryResult<TaskList> {
    let TaskListRow {
        id: persisted_id,
        name: persisted_name,
        created_at,
        updated_at,
    } = row;

    let uuid = Uuid::parse_str(&persisted_id).map_err(RepositoryError::invalid_persisted_data)?;
    let name = TaskListName::new(persisted_name).map_err(RepositoryError::invalid_persisted_data)?;

    Ok(TaskList::from_persisted(PersistedTaskListData {
        id: TaskListId::from_uuid(uuid),
        name,
        created_at: created_at.and_utc(),
        updated_at: updated_at.map(|timestamp| timestamp.and_utc()),
    }))
}
