//! Permissive CORS headers for the browser quiz client.

use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;

/// Value of `Access-Control-Allow-Origin`.
pub const ALLOW_ORIGIN: &str = "*";
/// Value of `Access-Control-Allow-Headers`.
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization, true";
/// Value of `Access-Control-Allow-Methods`.
pub const ALLOW_METHODS: &str = "GET, POST, PATCH, DELETE, OPTIONS";

/// Middleware stamping the CORS headers onto every response.
///
/// Handlers never set these headers themselves, so `DefaultHeaders` applies
/// them unconditionally, error responses included.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use trivia::middleware::cors;
///
/// let app = App::new().wrap(cors::headers());
/// ```
#[must_use]
pub fn headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS))
}
