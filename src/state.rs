use std::sync::Arc;

use crate::application::services::{CatalogService, CatalogSettings, NewsService};
use crate::domain::gateways::{NewsQuery, SteamApi};

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
    pub news_service: Arc<NewsService>,
}

impl AppState {
    /// Builds both services on top of one upstream client.
    pub fn new(api: Arc<dyn SteamApi>, catalog: CatalogSettings, news: NewsQuery) -> Self {
        Self {
            catalog_service: Arc::new(CatalogService::new(api.clone(), catalog)),
            news_service: Arc::new(NewsService::new(api, news)),
        }
    }
}
