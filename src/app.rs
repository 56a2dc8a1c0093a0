//! Composition root: builds the object graph served by each request.

use std::fmt;
use std::sync::Arc;

use mockable::DefaultClock;

use crate::config::Settings;
use crate::task::{
    adapters::sqlite::{
        Database, DatabaseError, SqliteTaskListRepository, SqliteTaskRepository, UnitOfWork,
    },
    application::{TaskListUseCases, TaskUseCases},
    services::{TaskListService, TaskService},
};

/// Task list use cases backed by `SQLite`.
pub type SqliteTaskListUseCases = TaskListUseCases<SqliteTaskListRepository, DefaultClock>;

/// Task use cases backed by `SQLite`.
pub type SqliteTaskUseCases = TaskUseCases<SqliteTaskRepository, DefaultClock>;

/// Process-wide state shared by request handlers.
///
/// Only the pool and the clock live here; repositories, services and use
/// cases are rebuilt for every unit of work.
#[derive(Clone)]
pub struct AppState {
    database: Database,
    clock: Arc<DefaultClock>,
}

impl AppState {
    /// Creates state around an opened database.
    #[must_use]
    pub fn new(database: Database) -> Self {
        Self {
            database,
            clock: Arc::new(DefaultClock),
        }
    }

    /// Returns the database handle.
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.database
    }

    /// Builds task list use cases bound to `unit_of_work`.
    #[must_use]
    pub fn task_lists(&self, unit_of_work: UnitOfWork) -> SqliteTaskListUseCases {
        let repository = Arc::new(SqliteTaskListRepository::new(unit_of_work));
        TaskListUseCases::new(TaskListService::new(repository, Arc::clone(&self.clock)))
    }

    /// Builds task use cases bound to `unit_of_work`.
    #[must_use]
    pub fn tasks(&self, unit_of_work: UnitOfWork) -> SqliteTaskUseCases {
        let repository = Arc::new(SqliteTaskRepository::new(
            unit_of_work,
            Arc::clone(&self.clock),
        ));
        TaskUseCases::new(TaskService::new(repository, Arc::clone(&self.clock)))
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("database", &self.database)
            .finish_non_exhaustive()
    }
}

/// Opens the configured database, applies the schema and returns the state
/// handed to the HTTP router.
///
/// # Errors
///
/// Returns [`DatabaseError`] when the pool cannot be built or the schema
/// cannot be applied.
pub fn bootstrap(settings: &Settings) -> Result<AppState, DatabaseError> {
    let database = Database::connect(&settings.database_url, settings.pool_size)?;
    database.initialise_schema()?;
    Ok(AppState::new(database))
}
