//! Upstream wire shapes and their projection onto domain entities.
//!
//! Only the fields the service returns are declared; serde ignores the rest.
//! Every field is optional because Steam omits or nulls them freely
//! (`"website": null` is common), and the projection substitutes empty
//! strings and zeros.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::entities::{AppDetail, AppSummary, NewsItem};

/// `GET /ISteamApps/GetAppList/v2/`
#[derive(Debug, Deserialize)]
pub struct AppListEnvelope {
    pub applist: Option<AppListBody>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppListBody {
    #[serde(default)]
    pub apps: Vec<WireApp>,
}

#[derive(Debug, Deserialize)]
pub struct WireApp {
    pub appid: Option<u32>,
    pub name: Option<String>,
}

impl From<WireApp> for AppSummary {
    fn from(app: WireApp) -> Self {
        AppSummary::new(app.appid.unwrap_or_default(), app.name.unwrap_or_default())
    }
}

/// The `data` object of `GET /api/appdetails?appids={id}`.
#[derive(Debug, Deserialize)]
pub struct WireAppDetails {
    pub name: Option<String>,
    pub short_description: Option<String>,
    pub header_image: Option<String>,
    pub website: Option<String>,
}

impl WireAppDetails {
    pub fn into_detail(self, app_id: u32) -> AppDetail {
        AppDetail {
            id: app_id,
            name: self.name.unwrap_or_default(),
            short_description: self.short_description.unwrap_or_default(),
            header_image_url: self.header_image.unwrap_or_default(),
            website_url: self.website.unwrap_or_default(),
        }
    }
}

/// Pulls the `data` object out of an app-details payload.
///
/// The payload is keyed by the requested id itself:
/// `{"440": {"success": true, "data": {...}}}`. The entry for `app_id` is
/// preferred; a payload holding a single entry under another key is accepted
/// too.
///
/// Returns the name of the missing key on failure.
pub fn take_app_data(mut payload: Map<String, Value>, app_id: u32) -> Result<Value, String> {
    let key = app_id.to_string();

    let entry = match payload.remove(&key) {
        Some(entry) => entry,
        None if payload.len() == 1 => payload
            .into_iter()
            .next()
            .map(|(_, entry)| entry)
            .ok_or_else(|| key.clone())?,
        None => return Err(key),
    };

    match entry {
        Value::Object(mut fields) => fields.remove("data").ok_or_else(|| "data".to_string()),
        _ => Err("data".to_string()),
    }
}

/// `GET /ISteamNews/GetNewsForApp/v0002/`
#[derive(Debug, Deserialize)]
pub struct NewsEnvelope {
    pub appnews: Option<NewsBody>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewsBody {
    #[serde(default)]
    pub newsitems: Vec<WireNewsItem>,
}

#[derive(Debug, Deserialize)]
pub struct WireNewsItem {
    pub title: Option<String>,
    pub author: Option<String>,
    pub contents: Option<String>,
    pub date: Option<i64>,
    pub feedname: Option<String>,
    pub appid: Option<u32>,
}

impl From<WireNewsItem> for NewsItem {
    fn from(item: WireNewsItem) -> Self {
        NewsItem {
            title: item.title.unwrap_or_default(),
            author: item.author.unwrap_or_default(),
            contents: item.contents.unwrap_or_default(),
            published_at: item.date.unwrap_or_default(),
            feed_name: item.feedname.unwrap_or_default(),
            app_id: item.appid.unwrap_or_default(),
        }
    }
}
