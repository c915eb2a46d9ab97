use actix_web::{HttpResponse, Responder, get, http::header::ContentType};

const LANDING_PAGE: &str = r#"
    <html>
        <head><title>AnoteQuest</title></head>
        <body>
            <h1>AnoteQuest API is live 🚀</h1>
            <p>Go to <a href="/docs">/docs</a> for API documentation.</p>
        </body>
    </html>
    "#;

/// # Landing Page
///
/// Serves a minimal HTML page confirming the API is up, with a link to the
/// Swagger UI at `/docs`.
///
/// ## Response
///
/// - **200 OK**
///   - Content-Type: `text/html`
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(LANDING_PAGE)
}
