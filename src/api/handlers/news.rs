//! Handler for per-game news.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::news::NewsResponse;
use crate::error::{AppError, map_upstream_error};
use crate::state::AppState;

/// Returns the latest news of a game.
///
/// # Endpoint
///
/// `GET /steamgamesnews/{appid}`
///
/// # Response
///
/// ```json
/// {
///   "news": [
///     {
///       "title": "Patch",
///       "author": "Valve",
///       "contents": "...",
///       "date": 1700000000,
///       "feedname": "steam_community_announcements",
///       "appid": 440
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `appid` is not an unsigned integer.
/// Relays a non-success upstream status with an empty body.
/// Returns 500 Internal Server Error for any other upstream failure.
#[utoipa::path(
    get,
    path = "/steamgamesnews/{appid}",
    tag = "steam",
    params(("appid" = u32, Path, description = "Steam app id")),
    responses(
        (status = 200, description = "Latest news items", body = NewsResponse),
        (status = 400, description = "appid is not an unsigned integer"),
        (status = 500, description = "Upstream payload could not be used"),
        (status = "4XX", description = "Upstream status relayed"),
    )
)]
pub async fn news_handler(
    State(state): State<AppState>,
    Path(app_id): Path<u32>,
) -> Result<Json<NewsResponse>, AppError> {
    let news = state
        .news_service
        .latest_news(app_id)
        .await
        .map_err(|e| map_upstream_error("latest_news", e))?;

    Ok(Json(NewsResponse::from(news)))
}
