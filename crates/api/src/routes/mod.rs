//! API routes

pub mod deployments;
pub mod health;

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{
    error::ApiError,
    state::AppState,
    websocket::{require_allowed_origin, ws_handler},
};

/// Create all API routes
pub fn create_router(state: AppState) -> Router {
    // Health check routes (at root level for infrastructure monitoring)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness));

    // Tenant addressing - under /api/v1
    let api_routes = Router::new().route(
        "/deployments/:deployment_id/url",
        get(deployments::get_deployment_url),
    );

    // Upgrade routes, origin-checked before the handler runs
    let ws_routes = Router::new()
        .route("/ws/:deployment_id", get(ws_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_allowed_origin,
        ));

    Router::new()
        .merge(health_routes)
        .nest("/api/v1", api_routes)
        .merge(ws_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
