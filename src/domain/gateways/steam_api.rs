//! Gateway trait for the Steam Web and Store APIs.

use crate::domain::entities::{AppDetail, AppSummary, NewsItem};
use crate::domain::gateways::UpstreamError;
use async_trait::async_trait;

/// Paging options for a news request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsQuery {
    /// Maximum number of news items to return.
    pub count: u32,
    /// Truncation length of `contents`; `0` returns the full text.
    pub max_length: u32,
}

impl Default for NewsQuery {
    fn default() -> Self {
        Self {
            count: 10,
            max_length: 300,
        }
    }
}

/// Read-only access to the Steam catalogue, store details and news.
///
/// Every call performs exactly one upstream request. Nothing is retried or
/// cached; failures are returned as [`UpstreamError`] tagged with the
/// offending resource.
///
/// # Implementations
///
/// - [`crate::infrastructure::steam::SteamClient`] - reqwest-backed client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SteamApi: Send + Sync {
    /// Fetches the application catalogue.
    ///
    /// Entries whose name is empty or whitespace-only are dropped before
    /// `limit` is applied, so the result holds at most `limit` named entries.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Shape`] if the payload has no `applist` key.
    async fn fetch_app_list(&self, limit: Option<usize>) -> Result<Vec<AppSummary>, UpstreamError>;

    /// Fetches store details for one application.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Shape`] if the payload has no entry for the
    /// application or the entry has no `data` field (unknown ids).
    async fn fetch_app_detail(&self, app_id: u32) -> Result<AppDetail, UpstreamError>;

    /// Fetches the latest news for one application.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Shape`] if the payload has no `appnews` key.
    async fn fetch_news(&self, app_id: u32, query: NewsQuery)
    -> Result<Vec<NewsItem>, UpstreamError>;
}
