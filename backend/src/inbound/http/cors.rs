//! Permissive CORS headers attached to every response.

use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;

/// Methods advertised in `Access-Control-Allow-Methods`.
pub const ALLOWED_METHODS: &str = "GET, PUT, PATCH";

/// Preflight cache lifetime in seconds (12 hours).
pub const MAX_AGE_SECS: u32 = 12 * 60 * 60;

/// Middleware adding the CORS headers.
///
/// Any origin is accepted and credentials are not allowed, so browsers can
/// call the mock from any dev server.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use birdhouse_mock::inbound::http::cors::cors_headers;
///
/// let _app = App::new().wrap(cors_headers());
/// ```
#[must_use]
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, "Origin"))
        .add((header::ACCESS_CONTROL_EXPOSE_HEADERS, "Content-Length"))
        .add((header::ACCESS_CONTROL_MAX_AGE, MAX_AGE_SECS.to_string()))
}
