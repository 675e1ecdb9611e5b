//! # Game News API
//!
//! A small backend that proxies the public Steam Web API and reshapes its
//! game list, store details and news for a browser client.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, the upstream gateway trait and its errors
//! - **Application Layer** ([`application`]) - Services and the concurrent fan-out
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest client for the Steam hosts
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Catalogue listing with empty-name filtering
//! - Store details fetched concurrently with best-effort partial results
//! - Per-game news
//! - Single-origin CORS for the front-end client
//! - OpenAPI document and Swagger UI (see [`api::docs`])
//!
//! ## Quick Start
//!
//! ```bash
//! # Allow the front-end origin (optional, this is the default)
//! export CORS_ORIGIN="http://localhost:5293"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::fanout::{FanoutPolicy, fan_out};
    pub use crate::application::services::{CatalogService, CatalogSettings, NewsService};
    pub use crate::domain::entities::{AppDetail, AppSummary, NewsItem};
    pub use crate::domain::gateways::{NewsQuery, SteamApi, UpstreamError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::steam::SteamClient;
    pub use crate::state::AppState;
}
