//! Employee directory endpoints.
//!
//! The search handler is the only rate-limited route. Requests without an
//! `org_id` are rejected before admission and never consume quota. Paging
//! parameters are validated after admission.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{ConnectInfo, Query, State};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;

use staffdir_search::{DirectorySearch, SearchRequest};

use crate::clock::Clock;
use crate::error::{ApiError, ErrorResponse, X_RATELIMIT_LIMIT, X_RATELIMIT_REMAINING};
use crate::rate_limit::{Admission, RateLimitKey};
use crate::state::GatewayState;

/// Search employees of one organization.
///
/// # Example
///
/// ```text
/// GET /api/v1/employees/search?org_id=org_b&department=Engineering
///
/// Response: 200 OK
/// X-RateLimit-Limit: 2
/// X-RateLimit-Remaining: 1
/// {
///   "items": [
///     {"name": "Charlie Wilson", "department": "Engineering", "position": "Architect"},
///     {"name": "John Smith", "department": "Engineering", "position": "SE"}
///   ],
///   "total": 2,
///   "limit": 20,
///   "offset": 0
/// }
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - `org_id` is missing (422, never rate limited)
/// - The organization's window is exhausted (429)
/// - `limit`/`offset` are out of range (422)
/// - The store cannot be read (500)
#[utoipa::path(
    get,
    path = "/api/v1/employees/search",
    tag = "Employees",
    params(
        ("org_id" = String, Query, description = "Organization to search within"),
        ("name" = Option<String>, Query, description = "Case-insensitive substring of the name"),
        ("department" = Option<String>, Query, description = "Exact department"),
        ("location" = Option<String>, Query, description = "Exact location"),
        ("position" = Option<String>, Query, description = "Exact position"),
        ("limit" = Option<u32>, Query, description = "Page size, 1-100, default 20"),
        ("offset" = Option<u64>, Query, description = "Records to skip, default 0"),
    ),
    responses(
        (
            status = 200,
            description = "Matching employees projected onto the organization's columns",
            headers(
                ("x-ratelimit-limit" = u32, description = "Requests admitted per window"),
                ("x-ratelimit-remaining" = u32, description = "Requests left in the window")
            )
        ),
        (status = 422, description = "Missing org_id or invalid paging", body = ErrorResponse),
        (
            status = 429,
            description = "Organization exceeded its request window",
            body = ErrorResponse,
            headers(("retry-after" = u64, description = "Seconds until the window reopens"))
        ),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn search_employees<D, C>(
    State(state): State<Arc<GatewayState<D, C>>>,
    peer: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    query: Result<Query<SearchRequest>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    D: DirectorySearch + 'static,
    C: Clock + 'static,
{
    let Query(request) = query.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let Some(org_id) = request.org_id() else {
        return Err(ApiError::Validation("org_id is required".to_string()));
    };

    let key = RateLimitKey::resolve(Some(org_id), &headers, peer.map(|ConnectInfo(addr)| addr));
    let limit = state.limiter.max_requests();
    let remaining = match state.limiter.check(key.as_str()) {
        Admission::Allowed { remaining } => remaining,
        Admission::Denied { retry_after } => {
            tracing::warn!(key = %key, limit, "Rate limit exceeded");
            return Err(ApiError::RateLimited { retry_after, limit });
        }
    };

    let filters = request.into_filters()?;
    let result = state.search.search(filters).await?;

    Ok((
        [
            (X_RATELIMIT_LIMIT, limit.to_string()),
            (X_RATELIMIT_REMAINING, remaining.to_string()),
        ],
        Json(result),
    ))
}
