//! DTOs for the news endpoint.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::entities::NewsItem;

/// News of one game.
#[derive(Debug, Serialize, ToSchema)]
pub struct NewsResponse {
    pub news: Vec<NewsItemResponse>,
}

/// A single news post.
#[derive(Debug, Serialize, ToSchema)]
pub struct NewsItemResponse {
    pub title: String,
    pub author: String,
    pub contents: String,
    /// Unix timestamp in seconds.
    pub date: i64,
    pub feedname: String,
    pub appid: u32,
}

impl From<NewsItem> for NewsItemResponse {
    fn from(item: NewsItem) -> Self {
        Self {
            title: item.title,
            author: item.author,
            contents: item.contents,
            date: item.published_at,
            feedname: item.feed_name,
            appid: item.app_id,
        }
    }
}

impl From<Vec<NewsItem>> for NewsResponse {
    fn from(items: Vec<NewsItem>) -> Self {
        Self {
            news: items.into_iter().map(NewsItemResponse::from).collect(),
        }
    }
}
