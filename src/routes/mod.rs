use actix_web::web;

/// # Landing Page
///
/// Minimal HTML page confirming the API is live, with a pointer to the
/// Swagger UI. Lives outside the `/api` prefix.
pub mod home;

/// # Health Check Endpoint
///
/// Reports whether the required environment configuration is present.
/// Deliberately does not verify that the store is reachable.
pub mod health;

/// # Status Check Endpoints
///
/// Create/list pair for status check records, plus the liveness greeting at
/// the API root.
///
/// ## Example Endpoints
///
/// ```text
/// GET  /api/        - Hello World liveness placeholder
/// POST /api/status  - Create one status check
/// GET  /api/status  - List up to 1000 status checks
/// ```
pub mod status;

/// # API Route Configuration
///
/// The status check endpoints live under the `/api` base path; the landing
/// page and health check sit outside it.
///
/// ## Mounted Services
///
/// ```text
/// GET  /            - HTML landing page
/// GET  /health      - Configuration presence probe
/// GET  /api/        - Liveness placeholder
/// POST /api/status  - Create a status check
/// GET  /api/status  - List status checks
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home::index)
        .configure(health::configure_routes)
        .service(web::scope("/api").configure(status::configure_routes));
}
