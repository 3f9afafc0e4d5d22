use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("data store error: {0}")]
    DataStore(#[from] sqlx::Error),

    #[error("failed to decode row: {0}")]
    Decode(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Short label used for the `outcome` metric dimension.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
            AppError::Validation(_) => "validation",
            AppError::DataStore(_) => "data_store",
            AppError::Decode(_) => "decode",
            AppError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::DataStore(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("data store error: {err}"),
            ),
            AppError::Decode(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("failed to decode row: {msg}"),
            ),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
