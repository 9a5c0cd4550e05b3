use axum::{http::StatusCode, response::Json};
use pizzeria_store::StoreError;
use serde_json::json;
use tracing::error;

pub const RESTAURANT_NOT_FOUND: &str = "Restaurant not found";
pub const VALIDATION_ERRORS: &str = "validation errors";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(&'static str),
    /// Every reason a write can be refused collapses into this one.
    #[error("validation errors")]
    ValidationFailed,
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl ApiError {
    /// Maps a store error on a restaurant lookup. Anything other than a
    /// missing row is unexpected.
    pub fn restaurant_lookup(err: StoreError) -> Self {
        if err.is_not_found() {
            ApiError::NotFound(RESTAURANT_NOT_FOUND)
        } else {
            ApiError::from(err)
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        error!(error = %err, "store error");
        ApiError::InternalError(err.to_string())
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match &self {
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": msg }))).into_response()
            }
            ApiError::ValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errors": [VALIDATION_ERRORS] })),
            )
                .into_response(),
            ApiError::InternalError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": msg })),
            )
                .into_response(),
        }
    }
}
