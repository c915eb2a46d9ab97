use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web::Data};
use anotequest_api::config::Config;
use anotequest_api::openapi::ApiDoc;
use anotequest_api::service::StatusService;
use anotequest_api::store::{MongoStatusStore, STATUS_CHECKS_COLLECTION};
use mongodb::Client;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// AnoteQuest Backend Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Status check REST endpoints backed by MongoDB
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
/// - CORS policy built from the `CORS_ORIGINS` allow-list
///
/// # Endpoints
/// - Landing page: `/`
/// - Health check: `/health`
/// - Status checks: `/api/status` (configured in routes)
/// - Swagger UI: `/docs/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `127.0.0.1:8080`
/// - `MONGO_URL` and `DB_NAME` are required; startup fails without them
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().map_err(std::io::Error::other)?;

    // One client for the whole process; dropped at shutdown.
    let client = Client::with_uri_str(&config.mongo_url)
        .await
        .map_err(std::io::Error::other)?;
    let collection = client
        .database(&config.db_name)
        .collection(STATUS_CHECKS_COLLECTION);
    let service = StatusService::new(Arc::new(MongoStatusStore::new(collection)));

    tracing::info!(db_name = %config.db_name, "starting HTTP server on 127.0.0.1:8080");

    let cors_origins = config.cors_origins;
    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(cors_from_origins(&cors_origins))
            .wrap(Logger::default())
            .app_data(Data::new(service.clone()))
            .app_data(Data::new(openapi.clone()))
            .configure(anotequest_api::routes::configure)
            .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}

/// Builds the CORS middleware from the configured allow-list. A `*` entry
/// means any origin, with credentials supported.
fn cors_from_origins(origins: &[String]) -> Cors {
    if origins.iter().any(|origin| origin == "*") {
        return Cors::permissive();
    }

    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}
