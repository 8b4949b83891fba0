use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

/// Request-handling errors. Every failure path resolves to an explicit HTTP
/// response; the underlying fault is logged server-side and the client sees
/// only a generic code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("storage error: {0}")]
    Storage(#[from] todo_store::StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("request failed: {self}");
        let body = Json(serde_json::json!({ "error": "storage" }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
