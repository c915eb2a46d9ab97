use crate::error::ApiError;
use crate::models::status::{StatusCheck, StatusCheckCreate};
use crate::service::StatusService;
use actix_web::{HttpResponse, Responder, get, post, web};
use serde_json::json;

/// # API Root Endpoint
///
/// Liveness placeholder under the `/api` prefix. Performs no store
/// interaction.
///
/// ## Response
///
/// - **200 OK**
///   - Body: `{"message": "Hello World"}`
#[utoipa::path(
    get,
    path = "/api/",
    responses(
        (status = 200, description = "Hello World greeting")
    ),
    tag = "Status Checks"
)]
#[get("/")]
pub async fn api_root() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Hello World" }))
}

/// # Create Status Check Endpoint
///
/// Persists one status check for the calling client. The `id` and
/// `timestamp` are generated server-side; the client supplies only its
/// name.
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with `client_name` field
///
/// ## Responses
/// - **200 OK**: The freshly created record
/// - **400 Bad Request**: Malformed request body; no store interaction is
///   attempted
/// - **500 Internal Server Error**: Store insert failed
///
/// ## Example Request
/// ```json
/// { "client_name": "alice" }
/// ```
#[utoipa::path(
    post,
    path = "/api/status",
    request_body = StatusCheckCreate,
    responses(
        (status = 200, description = "Created status check", body = StatusCheck),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Store operation failed")
    ),
    tag = "Status Checks"
)]
#[post("/status")]
pub async fn create_status_check(
    req: web::Json<StatusCheckCreate>,
    service: web::Data<StatusService>,
) -> Result<impl Responder, ApiError> {
    let check = service.create(&req.client_name).await?;
    Ok(HttpResponse::Ok().json(check))
}

/// # List Status Checks Endpoint
///
/// Returns every stored status check in the store's natural order, capped
/// at 1000 records. Timestamps are reconstituted from their stored string
/// form; the store's internal `_id` field is never included.
///
/// ## Responses
/// - **200 OK**: Array of status checks (empty array for an empty store)
/// - **500 Internal Server Error**: Store read failed
#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Stored status checks", body = Vec<StatusCheck>),
        (status = 500, description = "Store operation failed")
    ),
    tag = "Status Checks"
)]
#[get("/status")]
pub async fn get_status_checks(
    service: web::Data<StatusService>,
) -> Result<impl Responder, ApiError> {
    let checks = service.list_all().await?;
    Ok(HttpResponse::Ok().json(checks))
}

/// Configures status check routes under the `/api` scope.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(api_root)
        .service(create_status_check)
        .service(get_status_checks);
}
