//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /steamgames`             - Catalogue entries
//! - `GET /steamgamesinfo`         - Store details fan-out
//! - `GET /steamgamesnews/{appid}` - Per-game news
//! - `GET /health`                 - Liveness
//! - `GET /api-docs/openapi.json`  - OpenAPI document
//! - `GET /swagger-ui/index.html`  - Swagger UI
//!
//! # Middleware
//!
//! - **CORS** - Single allowed origin (the front-end client)
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::docs;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors` - cross-origin policy, see [`crate::api::middleware::cors::layer`]
pub fn app_router(state: AppState, cors: CorsLayer) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::steam_routes())
        .route("/health", get(health_handler))
        .merge(docs::swagger_ui())
        .with_state(state)
        .layer(cors)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
