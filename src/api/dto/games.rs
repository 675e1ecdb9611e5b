//! DTOs for the game list and game details endpoints.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::entities::{AppDetail, AppSummary};

/// A catalogue entry.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameResponse {
    pub appid: u32,
    pub name: String,
}

impl From<AppSummary> for GameResponse {
    fn from(app: AppSummary) -> Self {
        Self {
            appid: app.id,
            name: app.name,
        }
    }
}

/// Store details of a game.
///
/// `detailed_description` carries the store's short description; the client
/// renders it under the header image.
#[derive(Debug, Serialize, ToSchema)]
pub struct GameInfoResponse {
    pub appid: u32,
    pub name: String,
    pub detailed_description: String,
    pub header_image: String,
    pub website: String,
}

impl From<AppDetail> for GameInfoResponse {
    fn from(detail: AppDetail) -> Self {
        Self {
            appid: detail.id,
            name: detail.name,
            detailed_description: detail.short_description,
            header_image: detail.header_image_url,
            website: detail.website_url,
        }
    }
}
