//! Mapping of layer errors onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::task::{
    domain::{ErrorKind, TaskId, TaskListId},
    ports::RepositoryError,
    services::{TaskListServiceError, TaskServiceError},
};

/// Error returned by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Task list service failure.
    #[error(transparent)]
    TaskList(#[from] TaskListServiceError),

    /// Task service failure.
    #[error(transparent)]
    Task(#[from] TaskServiceError),

    /// Unit of work failure outside any service call.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Lookup of a task list that does not exist.
    #[error("task list not found: {0}")]
    TaskListNotFound(TaskListId),

    /// Lookup of a task that does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
}

impl ApiError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TaskList(err) => err.kind(),
            Self::Task(err) => err.kind(),
            Self::Repository(err) => err.kind(),
            Self::TaskListNotFound(_) | Self::TaskNotFound(_) => ErrorKind::NotFound,
        }
    }

    /// Returns the response status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Storage => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "internal server error".to_owned()
        } else {
            tracing::debug!(error = %self, status = %status, "request rejected");
            self.to_string()
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
