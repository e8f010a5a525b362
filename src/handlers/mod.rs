pub mod add_school;
pub mod list_schools;

use axum::{http::StatusCode, response::IntoResponse, Json};
use tracing::error;

pub use add_school::add_school;
pub use list_schools::list_schools;

use crate::models::ErrorResponse;
use crate::services::StoreError;
use crate::validation::ValidationError;

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "school-locator",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Failure modes surfaced by the HTTP handlers.
///
/// Validation failures carry their message to the client; storage failures
/// are logged and surfaced as an opaque 500.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response(),
            ApiError::Storage(e) => {
                error!("storage failure: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("Internal Server Error")),
                )
                    .into_response()
            }
        }
    }
}
