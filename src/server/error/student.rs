use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures of the student CRUD operations.
///
/// Each variant carries the underlying storage error for logging while the client only
/// receives a short fixed message.
#[derive(Error, Debug)]
pub enum StudentError {
    /// Selecting the student list failed.
    #[error("Failed to list students: {0}")]
    ListFailed(#[source] DbErr),

    /// Inserting a student failed, including constraint violations.
    #[error("Failed to create student: {0}")]
    CreateFailed(#[source] DbErr),

    /// No student exists with the requested ID.
    #[error("Student {0} not found")]
    NotFound(i32),

    /// Storage failure while updating or deleting a student.
    #[error("Student storage error: {0}")]
    Storage(#[source] DbErr),
}

impl StudentError {
    /// Classifies a storage error raised while writing to the student with `id`.
    ///
    /// A row that vanished between lookup and write is reported as not found.
    pub fn from_write(id: i32, err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => Self::NotFound(id),
            err => Self::Storage(err),
        }
    }
}

/// Converts student errors into HTTP responses.
///
/// - `ListFailed` → 400 Bad Request with "list failed"
/// - `CreateFailed` → 400 Bad Request with "create failed"
/// - `NotFound` → 404 Not Found with "not found"
/// - `Storage` → 400 Bad Request with "storage error"
impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::ListFailed(_) => (StatusCode::BAD_REQUEST, "list failed"),
            Self::CreateFailed(_) => (StatusCode::BAD_REQUEST, "create failed"),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "not found"),
            Self::Storage(_) => (StatusCode::BAD_REQUEST, "storage error"),
        };

        match &self {
            Self::NotFound(_) => tracing::debug!("{}", self),
            _ => tracing::warn!("{}", self),
        }

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
