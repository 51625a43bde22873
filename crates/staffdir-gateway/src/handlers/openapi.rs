//! Handler serving the `OpenAPI` document.

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::{ApiError, ErrorResponse};
use crate::openapi::openapi_json;

/// Returns the gateway `OpenAPI` document as JSON.
///
/// Not rate limited.
#[utoipa::path(
    get,
    path = "/openapi.json",
    tag = "OpenAPI",
    responses(
        (
            status = 200,
            description = "OpenAPI document for the staffdir API",
            body = String,
            content_type = "application/json"
        ),
        (
            status = 500,
            description = "Internal error",
            body = ErrorResponse
        ),
    )
)]
pub async fn get_openapi_json() -> Response {
    match openapi_json() {
        Ok(document) => {
            (StatusCode::OK, [(CONTENT_TYPE, "application/json")], document).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to serialize OpenAPI document");
            ApiError::Internal("failed to serialize OpenAPI document".to_string()).into_response()
        }
    }
}
