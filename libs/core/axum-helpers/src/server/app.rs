use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::{
    create_cors_layer, create_permissive_cors_layer, parse_allowed_origins, security_headers,
};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::IntoFuture;
use std::io;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Builds the CORS layer from `CORS_ALLOWED_ORIGIN`.
///
/// Unset or empty means any origin is accepted.
fn cors_from_env() -> io::Result<CorsLayer> {
    let Ok(raw) = std::env::var("CORS_ALLOWED_ORIGIN") else {
        info!("CORS_ALLOWED_ORIGIN not set, accepting any origin");
        return Ok(create_permissive_cors_layer());
    };

    match parse_allowed_origins(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))? {
        Some(origins) => {
            info!("CORS configured with allowed origins: {}", raw);
            Ok(create_cors_layer(origins))
        }
        None => Ok(create_permissive_cors_layer()),
    }
}

/// Creates the application router with common middleware and documentation.
///
/// - OpenAPI JSON at `/api-docs/openapi.json` with Swagger UI, ReDoc, RapiDoc and Scalar
/// - API routes merged at the root
/// - Request tracing, security headers, CORS, response compression
/// - JSON 404/405 fallbacks
///
/// Domain routers should apply their own state before being passed in.
///
/// # Errors
/// Returns an error if `CORS_ALLOWED_ORIGIN` is set to an invalid value.
///
/// # Example
/// ```ignore
/// let api_routes = Router::new().merge(domain_codes::handlers::router(code_service));
/// let router = create_router::<ApiDoc>(api_routes)?;
/// ```
pub fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    use utoipa_rapidoc::RapiDoc;
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};
    use utoipa_swagger_ui::SwaggerUi;

    let cors_layer = cors_from_env()?;

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .merge(apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Serves `router` until SIGINT/SIGTERM, then drains in-flight requests.
///
/// Draining is bounded by `server_config.shutdown_timeout`; requests still
/// running after that are dropped.
///
/// # Errors
/// Returns an error if the listener cannot bind or the server fails.
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let (coordinator, mut shutdown_rx) = ShutdownCoordinator::new();
    let shutdown_timeout = server_config.shutdown_timeout;

    let server = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { coordinator.wait_for_signal().await })
        .into_future();

    let drain_deadline = async move {
        let _ = shutdown_rx.recv().await;
        tokio::time::sleep(shutdown_timeout).await;
    };

    tokio::select! {
        result = server => {
            result.inspect_err(|e| {
                tracing::error!("Server encountered an error: {:?}", e);
            })?;
            info!("Server stopped");
        }
        _ = drain_deadline => {
            warn!(
                "Graceful shutdown exceeded {:?}, dropping remaining connections",
                shutdown_timeout
            );
        }
    }

    Ok(())
}
