//! News entity for a Steam application.

/// A news post published for a Steam application.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewsItem {
    pub title: String,
    pub author: String,
    pub contents: String,
    /// Unix timestamp in seconds.
    pub published_at: i64,
    pub feed_name: String,
    pub app_id: u32,
}
