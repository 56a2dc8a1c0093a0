//! Shared test helpers for `SQLite` integration tests.

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use docket::task::{
    adapters::sqlite::{
        Database, DatabaseUrl, SqliteTaskListRepository, SqliteTaskRepository, UnitOfWork,
    },
    domain::{Task, TaskList, TaskListId},
};
use mockable::{Clock, DefaultClock};
use std::sync::Arc;
use rstest::fixture;
use tempfile::TempDir;

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Returns a clock `seconds` after a reference instant with sub-second
/// precision.
pub fn at(seconds: i64) -> FixedClock {
    let base = Utc
        .with_ymd_and_hms(2026, 5, 1, 12, 0, 0)
        .single()
        .expect("reference time should be unambiguous");
    FixedClock(base + TimeDelta::seconds(seconds) + TimeDelta::microseconds(123_456))
}

/// Database file living as long as its temporary directory.
pub struct TestDatabase {
    pub database: Database,
    _dir: TempDir,
}

impl TestDatabase {
    /// Opens a new unit of work.
    pub async fn begin(&self) -> UnitOfWork {
        self.database.begin().await.expect("begin unit of work")
    }
}

/// Provides a migrated database file for each test.
#[fixture]
pub fn test_database() -> TestDatabase {
    let dir = tempfile::tempdir().expect("create temporary directory");
    let path = dir.path().join("docket.db");
    let url = DatabaseUrl::parse(path.to_str().expect("utf-8 temp path")).expect("parse url");
    let database = Database::connect(&url, 2).expect("open database");
    database.initialise_schema().expect("apply schema");
    TestDatabase {
        database,
        _dir: dir,
    }
}

/// Builds both repositories over one unit of work.
pub fn repositories(
    unit_of_work: &UnitOfWork,
) -> (SqliteTaskListRepository, SqliteTaskRepository) {
    (
        SqliteTaskListRepository::new(unit_of_work.clone()),
        SqliteTaskRepository::new(unit_of_work.clone(), Arc::new(DefaultClock)),
    )
}

/// Builds a task list created at `seconds` past the reference instant.
pub fn task_list_at(name: &str, seconds: i64) -> TaskList {
    TaskList::new(name, &at(seconds)).expect("valid task list")
}

/// Builds a task created at `seconds` past the reference instant.
pub fn task_at(task_list_id: TaskListId, title: &str, seconds: i64) -> Task {
    Task::new(task_list_id, title, None, &at(seconds)).expect("valid task")
}
