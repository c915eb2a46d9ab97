use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural
/// macros. Served through the Swagger UI mounted at `/docs`.
///
/// # Endpoints
/// - Health Check: `GET /health`
/// - API Root: `GET /api/`
/// - Create Status Check: `POST /api/status`
/// - List Status Checks: `GET /api/status`
///
/// # Schemas
/// - `HealthResponse`: Configuration presence flags
/// - `StatusCheck`: Persisted status check record
/// - `StatusCheckCreate`: Create request body
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any
/// changes to the API surface should be reflected here first to maintain
/// documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::status::api_root,
        crate::routes::status::create_status_check,
        crate::routes::status::get_status_checks,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::status::StatusCheck,
            crate::models::status::StatusCheckCreate
        )
    ),
    tags(
        (name = "Health Check", description = "Service configuration probes"),
        (name = "Status Checks", description = "Status check creation and listing")
    ),
    info(
        description = "Backend API for AnoteQuest status check reporting",
        title = "AnoteQuest API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
