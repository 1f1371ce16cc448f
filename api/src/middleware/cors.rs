//! CORS middleware configuration.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use ds_shared::config::server::CorsConfig;

/// Creates a CORS middleware instance from configuration.
///
/// An empty origin list means any origin is allowed, which is only
/// intended for development. Credentials are never combined with the
/// any-origin wildcard.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(config.max_age as usize);

    if config.allowed_origins.is_empty() {
        tracing::warn!(
            event = "cors_any_origin",
            "No allowed origins configured, allowing any origin"
        );
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
        if config.allow_credentials {
            cors = cors.supports_credentials();
        }
    }

    cors
}
