//! Health and readiness endpoints.
//!
//! Neither endpoint is rate limited.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use staffdir_search::DirectorySearch;

use crate::clock::Clock;
use crate::error::{ApiError, ErrorResponse};
use crate::state::GatewayState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Readiness response.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    /// Readiness status.
    pub status: &'static str,
    /// Number of stored employees.
    pub employees: u64,
}

/// Health check handler.
///
/// Returns the current service status without touching the store.
///
/// # Example
///
/// ```text
/// GET /health
///
/// Response: 200 OK
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service is running"))
)]
pub async fn health() -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    };

    (StatusCode::OK, Json(response))
}

/// Readiness handler.
///
/// Reads the store once; reports 503 if that fails.
///
/// # Errors
///
/// Returns `ApiError::Unavailable` if the store cannot be read.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Store is readable"),
        (status = 503, description = "Store is unavailable", body = ErrorResponse),
    )
)]
pub async fn ready<D, C>(
    State(state): State<Arc<GatewayState<D, C>>>,
) -> Result<impl IntoResponse, ApiError>
where
    D: DirectorySearch + 'static,
    C: Clock + 'static,
{
    let employees = state.search.employee_count().map_err(|e| {
        tracing::error!(error = %e, "Readiness check failed");
        ApiError::Unavailable
    })?;

    Ok(Json(ReadyResponse {
        status: "ready",
        employees,
    }))
}
