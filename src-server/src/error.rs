use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use goalfolio_core::errors::Error as CoreError;
use serde_json::json;
use thiserror::Error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Wraps core errors so rejected transitions surface as status codes plus a
/// human-readable reason for the client to present.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] CoreError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Validation(_) | CoreError::Calculation(_) => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
