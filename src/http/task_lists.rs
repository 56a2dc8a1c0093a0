//! Task list handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use super::{ApiError, TaskListIn, TaskListOut};
use crate::app::AppState;
use crate::task::{
    application::{CreateTaskListRequest, PageRequest, RenameTaskListRequest},
    domain::TaskListId,
};

pub(super) async fn create(
    State(state): State<AppState>,
    Json(body): Json<TaskListIn>,
) -> Result<Json<TaskListOut>, ApiError> {
    let created = state
        .database()
        .run(|unit_of_work| {
            let use_cases = state.task_lists(unit_of_work);
            async move {
                use_cases
                    .create(CreateTaskListRequest::new(body.name))
                    .await
                    .map_err(ApiError::from)
            }
        })
        .await?;
    Ok(Json(created.into()))
}

pub(super) async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<TaskListOut>>, ApiError> {
    let task_lists = state
        .database()
        .run(|unit_of_work| {
            let use_cases = state.task_lists(unit_of_work);
            async move { use_cases.list(page).await.map_err(ApiError::from) }
        })
        .await?;
    Ok(Json(task_lists.into_iter().map(TaskListOut::from).collect()))
}

pub(super) async fn get(
    State(state): State<AppState>,
    Path(task_list_id): Path<TaskListId>,
) -> Result<Json<TaskListOut>, ApiError> {
    let found = state
        .database()
        .run(|unit_of_work| {
            let use_cases = state.task_lists(unit_of_work);
            async move { use_cases.get(task_list_id).await.map_err(ApiError::from) }
        })
        .await?;
    found
        .map(|task_list| Json(task_list.into()))
        .ok_or(ApiError::TaskListNotFound(task_list_id))
}

pub(super) async fn rename(
    State(state): State<AppState>,
    Path(task_list_id): Path<TaskListId>,
    Json(body): Json<TaskListIn>,
) -> Result<Json<TaskListOut>, ApiError> {
    let renamed = state
        .database()
        .run(|unit_of_work| {
            let use_cases = state.task_lists(unit_of_work);
            async move {
                use_cases
                    .rename(RenameTaskListRequest::new(task_list_id, body.name))
                    .await
                    .map_err(ApiError::from)
            }
        })
        .await?;
    Ok(Json(renamed.into()))
}

pub(super) async fn delete(
    State(state): State<AppState>,
    Path(task_list_id): Path<TaskListId>,
) -> Result<StatusCode, ApiError> {
    let removed = state
        .database()
        .run(|unit_of_work| {
            let use_cases = state.task_lists(unit_of_work);
            async move { use_cases.delete(task_list_id).await.map_err(ApiError::from) }
        })
        .await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::TaskListNotFound(task_list_id))
    }
}
