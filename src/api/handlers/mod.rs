//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod games;
pub mod health;
pub mod news;

pub use games::{games_handler, games_info_handler};
pub use health::health_handler;
pub use news::news_handler;
