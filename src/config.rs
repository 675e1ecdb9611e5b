//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:5080`)
//! - `CORS_ORIGIN` - The single origin allowed by CORS (default: `http://localhost:5293`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `UPSTREAM_TIMEOUT_SECS` - Timeout of every Steam request (default: 30)
//! - `APP_LIST_LIMIT` - Entries returned by `/steamgames` (default: 100)
//! - `DETAIL_BATCH_LIMIT` - Catalogue entries fanned out by `/steamgamesinfo` (default: 30)
//! - `FEATURED_APP_IDS` - Comma-separated ids fetched first by `/steamgamesinfo`
//!   (default: `730,570,440,578080`)
//! - `FANOUT_DELAY_MS` - Pause after each detail request (default: 1000)
//! - `FANOUT_MAX_IN_FLIGHT` - Concurrent detail requests (default: 48, max: 256)
//! - `NEWS_COUNT` - News items per request (default: 10, max: 100)
//! - `NEWS_MAX_LENGTH` - Truncation of news contents, `0` for full text (default: 300)
//!
//! The Steam hosts themselves are fixed, see
//! [`crate::infrastructure::steam::STEAM_WEB_API_URL`].

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::application::fanout::FanoutPolicy;
use crate::application::services::CatalogSettings;
use crate::domain::gateways::NewsQuery;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub cors_origin: String,
    pub log_level: String,
    pub log_format: String,
    pub upstream_timeout_secs: u64,
    pub app_list_limit: usize,
    pub detail_batch_limit: usize,
    /// Ids always placed before the catalogue entries of a detail batch.
    pub featured_app_ids: Vec<u32>,
    pub fanout_delay_ms: u64,
    pub fanout_max_in_flight: usize,
    pub news_count: u32,
    pub news_max_length: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable or `FEATURED_APP_IDS` cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5080".to_string());
        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:5293".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let featured_app_ids = match env::var("FEATURED_APP_IDS") {
            Ok(raw) => parse_app_ids(&raw).context("FEATURED_APP_IDS is invalid")?,
            Err(_) => vec![730, 570, 440, 578080],
        };

        Ok(Self {
            listen_addr,
            cors_origin,
            log_level,
            log_format,
            upstream_timeout_secs: parse_var("UPSTREAM_TIMEOUT_SECS", 30)?,
            app_list_limit: parse_var("APP_LIST_LIMIT", 100)?,
            detail_batch_limit: parse_var("DETAIL_BATCH_LIMIT", 30)?,
            featured_app_ids,
            fanout_delay_ms: parse_var("FANOUT_DELAY_MS", 1000)?,
            fanout_max_in_flight: parse_var("FANOUT_MAX_IN_FLIGHT", 48)?,
            news_count: parse_var("NEWS_COUNT", 10)?,
            news_max_length: parse_var("NEWS_MAX_LENGTH", 300)?,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `cors_origin` is not an absolute http(s) origin
    /// - a limit, the timeout or the fan-out cap is out of range
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let origin = url::Url::parse(&self.cors_origin)
            .with_context(|| format!("CORS_ORIGIN is not a valid URL: '{}'", self.cors_origin))?;
        if !matches!(origin.scheme(), "http" | "https") || origin.host_str().is_none() {
            anyhow::bail!(
                "CORS_ORIGIN must be an http(s) origin, got '{}'",
                self.cors_origin
            );
        }

        if self.upstream_timeout_secs == 0 {
            anyhow::bail!("UPSTREAM_TIMEOUT_SECS must be greater than 0");
        }

        if self.app_list_limit == 0 {
            anyhow::bail!("APP_LIST_LIMIT must be greater than 0");
        }

        if self.detail_batch_limit == 0 || self.detail_batch_limit > 200 {
            anyhow::bail!(
                "DETAIL_BATCH_LIMIT must be between 1 and 200, got {}",
                self.detail_batch_limit
            );
        }

        if self.fanout_delay_ms > 60_000 {
            anyhow::bail!(
                "FANOUT_DELAY_MS is too large (max: 60000), got {}",
                self.fanout_delay_ms
            );
        }

        if self.fanout_max_in_flight == 0 || self.fanout_max_in_flight > 256 {
            anyhow::bail!(
                "FANOUT_MAX_IN_FLIGHT must be between 1 and 256, got {}",
                self.fanout_max_in_flight
            );
        }

        if self.news_count == 0 || self.news_count > 100 {
            anyhow::bail!(
                "NEWS_COUNT must be between 1 and 100, got {}",
                self.news_count
            );
        }

        Ok(())
    }

    /// Settings of the catalogue service derived from this configuration.
    pub fn catalog_settings(&self) -> CatalogSettings {
        CatalogSettings {
            app_list_limit: self.app_list_limit,
            detail_batch_limit: self.detail_batch_limit,
            featured_app_ids: self.featured_app_ids.clone(),
            fanout: FanoutPolicy::new(
                Duration::from_millis(self.fanout_delay_ms),
                self.fanout_max_in_flight,
            ),
        }
    }

    /// News page shape derived from this configuration.
    pub fn news_query(&self) -> NewsQuery {
        NewsQuery {
            count: self.news_count,
            max_length: self.news_max_length,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  CORS origin: {}", self.cors_origin);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Upstream timeout: {}s", self.upstream_timeout_secs);
        tracing::info!(
            "  Catalogue: {} entries, detail batch {} + {} featured",
            self.app_list_limit,
            self.detail_batch_limit,
            self.featured_app_ids.len()
        );
        tracing::info!(
            "  Fan-out: {} in flight, {}ms settle delay",
            self.fanout_max_in_flight,
            self.fanout_delay_ms
        );
        tracing::info!(
            "  News: {} items, max length {}",
            self.news_count,
            self.news_max_length
        );
    }
}

/// Reads and parses an optional variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Parses a comma-separated id list; blank entries are skipped.
fn parse_app_ids(raw: &str) -> Result<Vec<u32>> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<u32>()
                .with_context(|| format!("'{id}' is not a Steam app id"))
        })
        .collect()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
