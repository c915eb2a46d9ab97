use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

/// Errors surfaced by the status check endpoints.
///
/// Store failures are not handled locally: they bubble up to the framework
/// and render as a generic 500 with no structured body. Malformed request
/// bodies never reach this type; actix's serde extractor rejects them with a
/// 400 before the handler runs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("store operation failed: {0}")]
    Store(#[from] mongodb::error::Error),

    #[error("malformed status check document: {0}")]
    Malformed(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!("request failed: {self}");
        HttpResponse::InternalServerError().finish()
    }
}
