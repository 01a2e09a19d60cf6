//! CORS middleware for the `/api` prefix.
//!
//! The voice-agent platform calls this service from browser contexts, so
//! every API response carries permissive CORS headers and `OPTIONS`
//! preflights are short-circuited with an empty 204 before routing.
//! `tower_http::cors::CorsLayer` answers preflights with 200, which is why
//! this is a bespoke layer instead.

use axum::{
    extract::Request,
    http::{header::HeaderName, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

const ALLOW_ORIGIN: &str = "*";
const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
// Everything the voice-agent platform is known to send.
const ALLOW_HEADERS: &str =
    "Content-Type, Authorization, access-control-allow-origin, X-Requested-With, Accept";

/// `axum::middleware::from_fn` layer applying CORS headers to `/api` paths.
pub async fn cors(request: Request, next: Next) -> Response {
    if !request.uri().path().starts_with("/api") {
        return next.run(request).await;
    }

    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(request).await;
    apply_cors_headers(response.headers_mut());
    response
}

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        HeaderName::from_static("access-control-allow-origin"),
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        HeaderName::from_static("access-control-allow-methods"),
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        HeaderName::from_static("access-control-allow-headers"),
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}
