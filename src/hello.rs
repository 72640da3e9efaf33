use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Router,
};

/// The one payload this service ever produces.
pub const BODY: &str = "Hello World\n";

const CONTENT_TYPE: &str = "text/plain";

pub fn router() -> Router {
    // No routes: the fallback catches every method and path.
    Router::new().fallback(hello)
}

async fn hello() -> impl IntoResponse {
    // The content-type is set explicitly so the wire value stays exactly
    // `text/plain`, without the charset suffix axum adds for `&str` bodies.
    (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE)], BODY)
}
