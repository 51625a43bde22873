//! `OpenAPI` (3.1) document for the gateway.

use std::sync::OnceLock;

use utoipa::OpenApi;

/// `OpenAPI` documentation for the staffdir HTTP API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "staffdir API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Multi-tenant employee directory search."
    ),
    paths(
        crate::handlers::openapi::get_openapi_json,
        crate::handlers::health::health,
        crate::handlers::health::ready,
        crate::handlers::employees::search_employees,
    ),
    components(schemas(crate::error::ErrorResponse, crate::error::ErrorBody)),
    tags(
        (name = "OpenAPI", description = "OpenAPI document endpoint"),
        (name = "Health", description = "Liveness and readiness"),
        (name = "Employees", description = "Directory search"),
    ),
)]
pub struct StaffdirApiDoc;

/// Returns the generated `OpenAPI` document.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    StaffdirApiDoc::openapi()
}

static OPENAPI_JSON_CACHE: OnceLock<String> = OnceLock::new();

/// Returns the generated `OpenAPI` document serialized as pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn openapi_json() -> Result<String, serde_json::Error> {
    if let Some(document) = OPENAPI_JSON_CACHE.get() {
        return Ok(document.clone());
    }

    let document = serde_json::to_string_pretty(&openapi())?;
    let _ = OPENAPI_JSON_CACHE.set(document.clone());
    Ok(document)
}
