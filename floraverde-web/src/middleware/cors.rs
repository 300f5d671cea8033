use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Process-wide permissive cross-origin policy: any origin, the four
/// mutating verbs plus read, and the content-type header. Preflight
/// `OPTIONS` requests short-circuit inside the middleware with an empty
/// success response.
pub(crate) fn middleware() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600)
}
