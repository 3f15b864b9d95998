/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * Outermost first:
 * 1. `TraceLayer` - one span per request
 * 2. `CorsLayer` - only when an allowed origin is configured
 * 3. `CookieManagerLayer` - cookie jar for the login, logout and gated routes
 */

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_cookies::CookieManagerLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state shared with every handler
/// * `cors_origin` - Browser origin allowed to call the API with credentials
///
/// # Route Details
///
/// - `GET /health` - liveness check, answers `ok`
/// - account, board and live routes from `api_routes`
///
/// Unknown routes answer 404.
pub fn create_router(app_state: AppState, cors_origin: Option<&str>) -> Router<()> {
    let router = Router::new().route("/health", get(health));

    let router = configure_api_routes(router);

    let router = router.layer(CookieManagerLayer::new());

    let router = match cors_origin.map(HeaderValue::from_str) {
        Some(Ok(origin)) => {
            tracing::info!("CORS enabled for {:?}", origin);
            router.layer(
                CorsLayer::new()
                    .allow_origin(origin)
                    .allow_credentials(true)
                    .allow_methods([Method::GET, Method::POST])
                    .allow_headers([CONTENT_TYPE]),
            )
        }
        Some(Err(e)) => {
            tracing::warn!("Ignoring invalid CORS origin: {}", e);
            router
        }
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn health() -> &'static str {
    "ok"
}
