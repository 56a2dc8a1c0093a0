//! HTTP transport adapter.
//!
//! Handlers translate JSON payloads into use-case requests. Every request
//! runs inside its own unit of work, committed when the handler succeeds and
//! rolled back when it fails.

mod dto;
mod error;
mod task_lists;
mod tasks;

pub use dto::{CreateTaskIn, TaskListIn, TaskListOut, TaskOut};
pub use error::ApiError;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::app::AppState;

/// Builds the application router.
///
/// Every route answers both with and without a trailing slash.
pub fn router(state: AppState) -> Router {
    let task_list_collection = || get(task_lists::list).post(task_lists::create);
    let task_list_item = || {
        get(task_lists::get)
            .patch(task_lists::rename)
            .delete(task_lists::delete)
    };
    let task_item = || get(tasks::get).delete(tasks::delete);

    Router::new()
        .route("/task-lists", task_list_collection())
        .route("/task-lists/", task_list_collection())
        .route("/task-lists/{task_list_id}", task_list_item())
        .route("/task-lists/{task_list_id}/", task_list_item())
        .route("/tasks", post(tasks::add))
        .route("/tasks/", post(tasks::add))
        .route("/tasks/by-list/{task_list_id}", get(tasks::list_by_task_list))
        .route("/tasks/by-list/{task_list_id}/", get(tasks::list_by_task_list))
        .route("/tasks/{task_id}", task_item())
        .route("/tasks/{task_id}/", task_item())
        .route("/tasks/{task_id}/complete", post(tasks::complete))
        .route("/tasks/{task_id}/complete/", post(tasks::complete))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
