use axum::http::{HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

const CORS_MAX_AGE: Duration = Duration::from_secs(3600);

/// Creates a CORS layer restricted to the given origins.
///
/// - Methods: GET, POST, PUT, DELETE, PATCH, OPTIONS
/// - Headers: any
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(CORS_MAX_AGE)
}

/// Creates a CORS layer that accepts any origin, method and header.
///
/// Native mobile clients send no meaningful `Origin`, so this is the default
/// for the public API. Credentials are not allowed with a wildcard origin.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(CORS_MAX_AGE)
}

/// Parses a comma-separated origin list such as
/// `http://localhost:3000,https://app.example.com`.
///
/// Returns `Ok(None)` when the list is empty.
pub fn parse_allowed_origins(raw: &str) -> Result<Option<Vec<HeaderValue>>, String> {
    let origins = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<HeaderValue>()
                .map_err(|e| format!("Invalid origin '{}': {}", s, e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((!origins.is_empty()).then_some(origins))
}
