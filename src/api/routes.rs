//! API route configuration.

use crate::api::handlers::{games_handler, games_info_handler, news_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Steam proxy routes.
///
/// # Endpoints
///
/// - `GET /steamgames`              - First named catalogue entries
/// - `GET /steamgamesinfo`          - Store details fan-out (successes only)
/// - `GET /steamgamesnews/{appid}`  - Latest news of one game
pub fn steam_routes() -> Router<AppState> {
    Router::new()
        .route("/steamgames", get(games_handler))
        .route("/steamgamesinfo", get(games_info_handler))
        .route("/steamgamesnews/{appid}", get(news_handler))
}
