//! `SQLite` adapters for task list and task persistence using Diesel ORM.
//!
//! Every repository operates inside a [`UnitOfWork`]: one pooled connection
//! holding one open transaction for the duration of a request. Diesel is
//! synchronous, so all statements run on tokio's blocking pool.

mod blocking;
mod database;
mod models;
mod schema;
mod task;
mod task_list;
mod unit_of_work;
mod url;


pub use database::{Database, DatabaseError};
pub use task::SqliteTaskRepository;
pub use task_list::SqliteTaskListRepository;
pub use unit_of_work::UnitOfWork;
pub use url::{DatabaseUrl, DatabaseUrlError, SqliteTarget};

use database::SqlitePool;
