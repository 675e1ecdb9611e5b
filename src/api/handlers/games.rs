//! Handlers for the game list and game details endpoints.

use axum::{Json, extract::State};

use crate::api::dto::games::{GameInfoResponse, GameResponse};
use crate::error::{AppError, map_upstream_error};
use crate::state::AppState;

/// Lists the first named games of the Steam catalogue.
///
/// # Endpoint
///
/// `GET /steamgames`
///
/// # Response
///
/// ```json
/// [
///   { "appid": 10, "name": "Counter-Strike" },
///   { "appid": 20, "name": "Team Fortress Classic" }
/// ]
/// ```
///
/// # Errors
///
/// Relays a non-success upstream status with an empty body.
/// Returns 500 Internal Server Error for any other upstream failure.
#[utoipa::path(
    get,
    path = "/steamgames",
    tag = "steam",
    responses(
        (status = 200, description = "First named catalogue entries", body = [GameResponse]),
        (status = 500, description = "Upstream payload could not be used"),
        (status = "5XX", description = "Upstream status relayed"),
    )
)]
pub async fn games_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<GameResponse>>, AppError> {
    let games = state
        .catalog_service
        .list_games()
        .await
        .map_err(|e| map_upstream_error("list_games", e))?;

    Ok(Json(games.into_iter().map(GameResponse::from).collect()))
}

/// Lists store details of the featured games and the first catalogue entries.
///
/// # Endpoint
///
/// `GET /steamgamesinfo`
///
/// # Request Flow
///
/// 1. Fetch the catalogue (first `DETAIL_BATCH_LIMIT` named entries)
/// 2. Prepend `FEATURED_APP_IDS`
/// 3. Fetch store details for every id concurrently
/// 4. Drop ids whose details could not be fetched
///
/// The response is therefore possibly shorter than the requested batch and
/// does not say which ids failed.
///
/// # Response
///
/// ```json
/// [
///   {
///     "appid": 440,
///     "name": "Team Fortress 2",
///     "detailed_description": "Nine distinct classes provide a broad range of tactical abilities.",
///     "header_image": "https://shared.steamstatic.com/store_item_assets/steam/apps/440/header.jpg",
///     "website": "http://www.teamfortress.com/"
///   }
/// ]
/// ```
///
/// # Errors
///
/// Fails only when the catalogue call fails: a non-success upstream status is
/// relayed with an empty body, anything else yields 500.
#[utoipa::path(
    get,
    path = "/steamgamesinfo",
    tag = "steam",
    responses(
        (status = 200, description = "Store details of the ids that could be fetched", body = [GameInfoResponse]),
        (status = 500, description = "Catalogue payload could not be used"),
        (status = "5XX", description = "Catalogue status relayed"),
    )
)]
pub async fn games_info_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<GameInfoResponse>>, AppError> {
    let details = state
        .catalog_service
        .list_game_details()
        .await
        .map_err(|e| map_upstream_error("list_game_details", e))?;

    Ok(Json(details.into_iter().map(GameInfoResponse::from).collect()))
}
