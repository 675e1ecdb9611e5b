//! reqwest-backed Steam client.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, instrument};

use super::wire::{AppListEnvelope, NewsEnvelope, WireAppDetails, take_app_data};
use crate::domain::entities::{AppDetail, AppSummary, NewsItem};
use crate::domain::gateways::{NewsQuery, SteamApi, UpstreamError};

/// Steam Web API host (catalogue and news).
pub const STEAM_WEB_API_URL: &str = "https://api.steampowered.com";
/// Steam Store API host (app details).
pub const STEAM_STORE_API_URL: &str = "https://store.steampowered.com";

/// Steam Web/Store API client.
///
/// Wraps a single pooled [`reqwest::Client`]; cloning the underlying client is
/// cheap and shares connections, so one `SteamClient` serves every request.
pub struct SteamClient {
    client: Client,
    web_api_url: String,
    store_api_url: String,
}

impl SteamClient {
    /// Creates a client against the public Steam hosts.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_base_urls(STEAM_WEB_API_URL, STEAM_STORE_API_URL, timeout)
    }

    /// Creates a client against alternative hosts, e.g. a local stub in tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn with_base_urls(
        web_api_url: &str,
        store_api_url: &str,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("game-news-api/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            web_api_url: web_api_url.trim_end_matches('/').to_string(),
            store_api_url: store_api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Performs a GET and decodes a success body as JSON.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
        resource: &str,
    ) -> Result<T, UpstreamError> {
        debug!("GET {} for {}", url, resource);

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| UpstreamError::Network {
                resource: resource.to_string(),
                cause: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Http {
                resource: resource.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| UpstreamError::Network {
            resource: resource.to_string(),
            cause: e.to_string(),
        })?;

        serde_json::from_str(&body).map_err(|e| UpstreamError::Decode {
            resource: resource.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl SteamApi for SteamClient {
    #[instrument(skip(self), level = "debug")]
    async fn fetch_app_list(&self, limit: Option<usize>) -> Result<Vec<AppSummary>, UpstreamError> {
        let resource = "app list";
        let url = format!("{}/ISteamApps/GetAppList/v2/", self.web_api_url);

        let envelope: AppListEnvelope = self.get_json(&url, &[], resource).await?;
        let body = envelope.applist.ok_or_else(|| UpstreamError::Shape {
            resource: resource.to_string(),
            missing_key: "applist".to_string(),
        })?;

        let named = body
            .apps
            .into_iter()
            .map(AppSummary::from)
            .filter(AppSummary::has_name);

        let apps: Vec<AppSummary> = match limit {
            Some(limit) => named.take(limit).collect(),
            None => named.collect(),
        };

        debug!(count = apps.len(), "Fetched app list");
        Ok(apps)
    }

    #[instrument(skip(self), level = "debug")]
    async fn fetch_app_detail(&self, app_id: u32) -> Result<AppDetail, UpstreamError> {
        let resource = format!("app details {app_id}");
        let url = format!("{}/api/appdetails", self.store_api_url);

        let payload: Map<String, Value> = self
            .get_json(&url, &[("appids", app_id.to_string())], &resource)
            .await?;

        let data = take_app_data(payload, app_id).map_err(|missing_key| UpstreamError::Shape {
            resource: resource.clone(),
            missing_key,
        })?;

        let details: WireAppDetails =
            serde_json::from_value(data).map_err(|e| UpstreamError::Decode {
                resource: resource.clone(),
                reason: e.to_string(),
            })?;

        Ok(details.into_detail(app_id))
    }

    #[instrument(skip(self), level = "debug")]
    async fn fetch_news(
        &self,
        app_id: u32,
        query: NewsQuery,
    ) -> Result<Vec<NewsItem>, UpstreamError> {
        let resource = format!("news {app_id}");
        let url = format!("{}/ISteamNews/GetNewsForApp/v0002/", self.web_api_url);
        let params = [
            ("appid", app_id.to_string()),
            ("count", query.count.to_string()),
            ("maxlength", query.max_length.to_string()),
            ("format", "json".to_string()),
        ];

        let envelope: NewsEnvelope = self.get_json(&url, &params, &resource).await?;
        let body = envelope.appnews.ok_or_else(|| UpstreamError::Shape {
            resource: resource.clone(),
            missing_key: "appnews".to_string(),
        })?;

        Ok(body.newsitems.into_iter().map(NewsItem::from).collect())
    }
}
