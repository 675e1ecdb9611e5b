//! Application layer services orchestrating upstream calls.
//!
//! Services consume the [`crate::domain::gateways::SteamApi`] trait and
//! provide a clean API for HTTP handlers and the `steamctl` binary.
//!
//! # Available Services
//!
//! - [`services::catalog_service::CatalogService`] - Game list and detail fan-out
//! - [`services::news_service::NewsService`] - Per-game news
//!
//! The [`fanout`] module holds the concurrent gather primitive used for
//! store details.

pub mod fanout;
pub mod services;
