//! Main application router.

use crate::{
    controllers::{article_controller, health_controller},
    middleware::{logging_middleware, response_cache_middleware},
    responses::Envelope,
    state::{AppState, ResponseCacheState},
};
use axum::{
    http::{HeaderValue, StatusCode},
    middleware, Router,
};
use folio_config::ServerConfig;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Creates the main application router.
///
/// The response cache wraps the article routes only; health endpoints are
/// never cached.
pub fn create_router(
    state: AppState,
    cache: ResponseCacheState,
    server_config: &ServerConfig,
) -> Router {
    let cors = create_cors_layer(server_config);

    let article_router = article_controller::router()
        .route_layer(middleware::from_fn_with_state(cache, response_cache_middleware));

    let router = Router::new()
        .merge(health_controller::router())
        .merge(article_router)
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with article and health endpoints");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if !server_config.cors_enabled {
        return CorsLayer::new();
    }

    if server_config.cors_origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server_config
        .cors_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn not_found() -> Envelope<()> {
    Envelope::message(StatusCode::NOT_FOUND, "Not Found")
}
