//! Game catalogue and store details service.

use std::sync::Arc;

use crate::application::fanout::{FanoutPolicy, fan_out};
use crate::domain::entities::{AppDetail, AppSummary};
use crate::domain::gateways::{SteamApi, UpstreamError};

/// Tunables of [`CatalogService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    /// Number of named entries returned by [`CatalogService::list_games`].
    pub app_list_limit: usize,
    /// Number of catalogue entries whose details are fetched by
    /// [`CatalogService::list_game_details`].
    pub detail_batch_limit: usize,
    /// Ids always fetched first by [`CatalogService::list_game_details`].
    pub featured_app_ids: Vec<u32>,
    pub fanout: FanoutPolicy,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            app_list_limit: 100,
            detail_batch_limit: 30,
            featured_app_ids: vec![730, 570, 440, 578080],
            fanout: FanoutPolicy::default(),
        }
    }
}

/// Service for the game catalogue and store details.
///
/// Details are fetched with a best-effort fan-out: one upstream call per id,
/// failures dropped from the result.
pub struct CatalogService<A: SteamApi + ?Sized = dyn SteamApi> {
    api: Arc<A>,
    settings: CatalogSettings,
}

impl<A: SteamApi + ?Sized> CatalogService<A> {
    /// Creates a new catalogue service.
    pub fn new(api: Arc<A>, settings: CatalogSettings) -> Self {
        Self { api, settings }
    }

    pub fn settings(&self) -> &CatalogSettings {
        &self.settings
    }

    /// Returns the first named entries of the catalogue.
    ///
    /// # Errors
    ///
    /// Returns the [`UpstreamError`] of the catalogue call.
    pub async fn list_games(&self) -> Result<Vec<AppSummary>, UpstreamError> {
        self.api
            .fetch_app_list(Some(self.settings.app_list_limit))
            .await
    }

    /// Returns store details for the featured ids followed by the first
    /// catalogue entries.
    ///
    /// Only the catalogue call can fail the whole operation. Detail failures
    /// shorten the result instead.
    ///
    /// # Errors
    ///
    /// Returns the [`UpstreamError`] of the catalogue call.
    pub async fn list_game_details(&self) -> Result<Vec<AppDetail>, UpstreamError> {
        let catalogue = self
            .api
            .fetch_app_list(Some(self.settings.detail_batch_limit))
            .await?;

        let ids: Vec<u32> = self
            .settings
            .featured_app_ids
            .iter()
            .copied()
            .chain(catalogue.iter().map(|app| app.id))
            .collect();

        Ok(self.fetch_details(ids).await)
    }

    /// Fetches store details for `ids` concurrently, keeping successes only.
    pub async fn fetch_details(&self, ids: Vec<u32>) -> Vec<AppDetail> {
        fan_out(ids, self.settings.fanout, |id| self.api.fetch_app_detail(id)).await
    }
}
