//! Shared test helpers for in-memory repository integration tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use docket::task::{
    adapters::memory::{InMemoryTaskListRepository, InMemoryTaskRepository},
    domain::{Task, TaskList, TaskListId},
};
use mockable::Clock;
use rstest::fixture;

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

/// Returns a clock `seconds` after a fixed reference instant.
pub fn at(seconds: i64) -> FixedClock {
    let base = Utc
        .with_ymd_and_hms(2026, 5, 1, 12, 0, 0)
        .single()
        .expect("reference time should be unambiguous");
    FixedClock(base + chrono::TimeDelta::seconds(seconds))
}

/// Provides a fresh task list repository for each test.
#[fixture]
pub fn task_lists() -> InMemoryTaskListRepository {
    InMemoryTaskListRepository::new()
}

/// Provides a fresh task repository for each test.
#[fixture]
pub fn tasks() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

/// Builds a task list created at `seconds` past the reference instant.
pub fn task_list_at(name: &str, seconds: i64) -> TaskList {
    TaskList::new(name, &at(seconds)).expect("valid task list")
}

/// Builds a task created at `seconds` past the reference instant.
pub fn task_at(task_list_id: TaskListId, title: &str, seconds: i64) -> Task {
    Task::new(task_list_id, title, None, &at(seconds)).expect("valid task")
}
