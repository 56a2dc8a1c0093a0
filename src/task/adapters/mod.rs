//! Adapter implementations for task list and task persistence.

pub mod memory;
pub mod sqlite;
