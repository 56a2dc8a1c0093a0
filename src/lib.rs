//! Docket: a task list service.
//!
//! Clients create task lists, add tasks to them, complete tasks and page
//! through the results over a small JSON API.
//!
//! # Architecture
//!
//! Docket follows hexagonal architecture principles:
//!
//! - **Domain**: entities and invariants with no infrastructure dependencies
//! - **Ports**: repository traits independent of the storage engine
//! - **Services** and **use cases**: orchestration over the ports
//! - **Adapters**: in-memory and `SQLite` repositories, the HTTP transport
//!
//! # Modules
//!
//! - [`task`]: the task list bounded context
//! - [`http`]: axum router and handlers
//! - [`app`]: composition root
//! - [`config`]: runtime settings
//! - [`telemetry`]: logging setup

pub mod app;
pub mod config;
pub mod http;
pub mod task;
pub mod telemetry;
