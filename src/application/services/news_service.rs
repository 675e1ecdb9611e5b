//! Per-game news service.

use std::sync::Arc;

use crate::domain::entities::NewsItem;
use crate::domain::gateways::{NewsQuery, SteamApi, UpstreamError};

/// Service for the latest news of a game.
pub struct NewsService<A: SteamApi + ?Sized = dyn SteamApi> {
    api: Arc<A>,
    query: NewsQuery,
}

impl<A: SteamApi + ?Sized> NewsService<A> {
    /// Creates a new news service requesting pages shaped by `query`.
    pub fn new(api: Arc<A>, query: NewsQuery) -> Self {
        Self { api, query }
    }

    /// Returns the latest news items of `app_id`, newest first as served upstream.
    ///
    /// # Errors
    ///
    /// Returns the [`UpstreamError`] of the news call.
    pub async fn latest_news(&self, app_id: u32) -> Result<Vec<NewsItem>, UpstreamError> {
        self.latest_news_with(app_id, self.query).await
    }

    /// Same as [`NewsService::latest_news`] with an explicit page shape.
    pub async fn latest_news_with(
        &self,
        app_id: u32,
        query: NewsQuery,
    ) -> Result<Vec<NewsItem>, UpstreamError> {
        self.api.fetch_news(app_id, query).await
    }
}
