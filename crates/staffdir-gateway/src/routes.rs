//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use staffdir_search::DirectorySearch;

use crate::clock::Clock;
use crate::handlers::{employees, health, openapi};
use crate::state::GatewayState;

/// Path of the rate-limited search endpoint.
pub const SEARCH_PATH: &str = "/api/v1/employees/search";

/// Create the gateway router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Health check
/// - `GET /ready` - Store readiness
/// - `GET /openapi.json` - `OpenAPI` document
///
/// ## Directory (rate limited)
/// - `GET /api/v1/employees/search` - Search employees of one organization
pub fn create_router<D, C>(state: GatewayState<D, C>) -> Router
where
    D: DirectorySearch + 'static,
    C: Clock + 'static,
{
    // Extract config values before moving state
    let cors_origins = state.config.cors_origins.clone();
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout = state.config.request_timeout();

    let cors = build_cors_layer(&cors_origins);

    let state = Arc::new(state);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready::<D, C>))
        .route("/openapi.json", get(openapi::get_openapi_json))
        .route(SEARCH_PATH, get(employees::search_employees::<D, C>))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
