//! Business logic services for the application layer.

pub mod catalog_service;
pub mod news_service;

pub use catalog_service::{CatalogService, CatalogSettings};
pub use news_service::NewsService;
