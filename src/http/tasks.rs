//! Task handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use super::{ApiError, CreateTaskIn, TaskOut};
use crate::app::AppState;
use crate::task::{
    application::{AddTaskRequest, ListTasksRequest, PageRequest},
    domain::{TaskId, TaskListId},
};

pub(super) async fn add(
    State(state): State<AppState>,
    Json(body): Json<CreateTaskIn>,
) -> Result<Json<TaskOut>, ApiError> {
    let request = AddTaskRequest::new(body.task_list_id, body.title)
        .with_optional_description(body.description);
    let created = state
        .database()
        .run(|unit_of_work| {
            let use_cases = state.tasks(unit_of_work);
            async move { use_cases.add(request).await.map_err(ApiError::from) }
        })
        .await?;
    Ok(Json(created.into()))
}

pub(super) async fn complete(
    State(state): State<AppState>,
    Path(task_id): Path<TaskId>,
) -> Result<Json<TaskOut>, ApiError> {
    let completed = state
        .database()
        .run(|unit_of_work| {
            let use_cases = state.tasks(unit_of_work);
            async move { use_cases.complete(task_id).await.map_err(ApiError::from) }
        })
        .await?;
    Ok(Json(completed.into()))
}

pub(super) async fn list_by_task_list(
    State(state): State<AppState>,
    Path(task_list_id): Path<TaskListId>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<TaskOut>>, ApiError> {
    let request = ListTasksRequest::new(task_list_id).with_page(page);
    let tasks = state
        .database()
        .run(|unit_of_work| {
            let use_cases = state.tasks(unit_of_work);
            async move { use_cases.list(request).await.map_err(ApiError::from) }
        })
        .await?;
    Ok(Json(tasks.into_iter().map(TaskOut::from).collect()))
}

pub(super) async fn get(
    State(state): State<AppState>,
    Path(task_id): Path<TaskId>,
) -> Result<Json<TaskOut>, ApiError> {
    let found = state
        .database()
        .run(|unit_of_work| {
            let use_cases = state.tasks(unit_of_work);
            async move { use_cases.get(task_id).await.map_err(ApiError::from) }
        })
        .await?;
    found
        .map(|task| Json(task.into()))
        .ok_or(ApiError::TaskNotFound(task_id))
}

pub(super) async fn delete(
    State(state): State<AppState>,
    Path(task_id): Path<TaskId>,
) -> Result<StatusCode, ApiError> {
    let removed = state
        .database()
        .run(|unit_of_work| {
            let use_cases = state.tasks(unit_of_work);
            async move { use_cases.delete(task_id).await.map_err(ApiError::from) }
        })
        .await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::TaskNotFound(task_id))
    }
}
