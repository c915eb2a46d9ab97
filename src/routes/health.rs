use crate::models::health::HealthResponse;
use actix_web::{HttpResponse, Responder, get};

/// # Health Check Endpoint
///
/// Reports whether the required environment configuration is present. It
/// deliberately does not verify that the store is reachable; a process with
/// both flags true can still fail store operations.
///
/// ## Response
///
/// - **200 OK**
///   - Body: JSON object with `mongo_url_set` and `db_name_set` booleans
///
/// ## Example Response
///
/// ```json
/// {
///   "mongo_url_set": true,
///   "db_name_set": true
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Configuration presence flags", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::current())
}

/// # Route Configuration
///
/// Registers the health endpoint at the application root, outside the
/// `/api` prefix.
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(health);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use serde_json::from_str;

    #[actix_web::test]
    async fn test_health_endpoint() {
        // The required variables are visible to the process in this test.
        unsafe {
            std::env::set_var("MONGO_URL", "mongodb://localhost:27017");
            std::env::set_var("DB_NAME", "anotequest");
        }

        // Set up test app
        let app = test::init_service(App::new().configure(configure_routes)).await;

        // Create test request
        let req = test::TestRequest::get().uri("/health").to_request();

        // Execute request
        let resp = test::call_service(&app, req).await;

        // Verify status code
        assert!(resp.status().is_success());

        // Verify response body
        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        let health_response: HealthResponse = from_str(body_str).unwrap();

        assert!(health_response.mongo_url_set);
        assert!(health_response.db_name_set);
    }

    #[actix_web::test]
    async fn test_health_content_type() {
        unsafe {
            std::env::set_var("MONGO_URL", "mongodb://localhost:27017");
            std::env::set_var("DB_NAME", "anotequest");
        }

        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        let content_type = resp
            .headers()
            .get("content-type")
            .expect("Content-Type header should be present");
        assert_eq!(content_type, "application/json");
    }
}
