//! Command-line client for the Steam proxy services.
//!
//! Drives the same services as the HTTP server, without the HTTP hop, which
//! makes it handy to check what the upstream currently returns.
//!
//! # Usage
//!
//! ```bash
//! # Page through the catalogue, 10 entries at a time
//! cargo run --bin steamctl -- apps --page-size 10
//!
//! # Fetch store details for a few games concurrently
//! cargo run --bin steamctl -- details 440 570 730
//!
//! # Latest news of a game
//! cargo run --bin steamctl -- news 440 --count 5
//! ```
//!
//! # Environment Variables
//!
//! Reads the same variables as the server (see `game_news_api::config`);
//! command-line flags take precedence.

use game_news_api::application::fanout::FanoutPolicy;
use game_news_api::application::services::{CatalogService, CatalogSettings, NewsService};
use game_news_api::config;
use game_news_api::domain::entities::{AppDetail, AppSummary, NewsItem};
use game_news_api::domain::gateways::{NewsQuery, SteamApi};
use game_news_api::infrastructure::steam::SteamClient;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// CLI client for the Steam proxy.
#[derive(Parser)]
#[command(name = "steamctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// List named catalogue entries
    Apps {
        /// Number of entries to fetch
        #[arg(short, long, default_value_t = 100, value_parser = at_least_one())]
        limit: usize,

        /// Entries per page
        #[arg(short, long, default_value_t = 10, value_parser = at_least_one())]
        page_size: usize,

        /// Print every page without prompting
        #[arg(short, long)]
        all: bool,
    },

    /// Fetch store details for the given app ids concurrently
    Details {
        /// Steam app ids
        #[arg(required = true)]
        ids: Vec<u32>,

        /// Pause after each request, in milliseconds
        #[arg(long, value_parser = clap::value_parser!(u64).range(..=60_000))]
        delay_ms: Option<u64>,

        /// Maximum concurrent requests
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..=256))]
        max_in_flight: Option<usize>,
    },

    /// Show the latest news of a game
    News {
        /// Steam app id
        app_id: u32,

        /// Number of news items
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=100))]
        count: Option<u32>,
    },
}

/// Sizes and counts bounded like the matching environment variables.
fn at_least_one() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::<usize>::new().range(1..)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let client: Arc<dyn SteamApi> = Arc::new(
        SteamClient::new(Duration::from_secs(config.upstream_timeout_secs))
            .context("Failed to build Steam client")?,
    );

    match cli.command {
        Commands::Apps {
            limit,
            page_size,
            all,
        } => {
            let settings = CatalogSettings {
                app_list_limit: limit,
                ..config.catalog_settings()
            };
            let service = CatalogService::new(client, settings);
            list_apps(&service, page_size, all).await?;
        }
        Commands::Details {
            ids,
            delay_ms,
            max_in_flight,
        } => {
            let mut settings = config.catalog_settings();
            settings.fanout = FanoutPolicy::new(
                delay_ms.map_or(settings.fanout.settle_delay, Duration::from_millis),
                max_in_flight.unwrap_or(settings.fanout.max_in_flight),
            );
            let service = CatalogService::new(client, settings);
            show_details(&service, ids).await;
        }
        Commands::News { app_id, count } => {
            let defaults = config.news_query();
            let query = NewsQuery {
                count: count.unwrap_or(defaults.count),
                ..defaults
            };
            let service = NewsService::new(client, defaults);
            show_news(&service, app_id, query).await?;
        }
    }

    Ok(())
}

/// Prints the catalogue page by page.
///
/// # Output Format
///
/// ```text
/// 🎮 Steam Catalogue (page 1/10)
///
///   App ID    Name
///   ──────────────────────────────────────────────
///   10        Counter-Strike
///   20        Team Fortress Classic
/// ```
async fn list_apps(service: &CatalogService, page_size: usize, all: bool) -> Result<()> {
    let apps = service
        .list_games()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch app list: {}", e))?;

    if apps.is_empty() {
        println!("{}", "  No named apps returned".yellow());
        return Ok(());
    }

    let pages: Vec<&[AppSummary]> = apps.chunks(page_size.max(1)).collect();
    let total_pages = pages.len();

    for (index, page) in pages.into_iter().enumerate() {
        println!(
            "{}",
            format!("🎮 Steam Catalogue (page {}/{})", index + 1, total_pages)
                .bright_blue()
                .bold()
        );
        println!();
        println!(
            "  {:<9} {}",
            "App ID".bright_white().bold(),
            "Name".bright_white().bold()
        );
        println!("  {}", "─".repeat(60).bright_black());

        for app in page {
            println!("  {:<9} {}", app.id.to_string().bright_black(), app.name.cyan());
        }
        println!();

        let is_last = index + 1 == total_pages;
        if !all && !is_last {
            let more = Confirm::new()
                .with_prompt("Show next page?")
                .default(true)
                .interact()?;

            if !more {
                break;
            }
        }
    }

    println!("  Total: {}", apps.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Fetches and prints store details, reporting ids that yielded nothing.
async fn show_details(service: &CatalogService, ids: Vec<u32>) {
    let policy = service.settings().fanout;
    println!(
        "{}",
        format!(
            "🔍 Fetching {} app(s), {} in flight, {}ms delay...",
            ids.len(),
            policy.max_in_flight,
            policy.settle_delay.as_millis()
        )
        .bright_blue()
    );
    println!();

    let started = Instant::now();
    let details = service.fetch_details(ids.clone()).await;
    let elapsed = started.elapsed();

    for detail in &details {
        print_detail(detail);
    }

    let missing: Vec<String> = ids
        .iter()
        .filter(|id| !details.iter().any(|d| d.id == **id))
        .map(u32::to_string)
        .collect();

    if !missing.is_empty() {
        println!(
            "{} {}",
            "⚠️  No details for:".yellow(),
            missing.join(", ").yellow()
        );
    }

    println!(
        "  Fetched {}/{} in {:.1}s",
        details.len().to_string().bright_green().bold(),
        ids.len(),
        elapsed.as_secs_f64()
    );
    println!();
}

fn print_detail(detail: &AppDetail) {
    println!(
        "  {} {}",
        detail.name.bright_white().bold(),
        format!("({})", detail.id).bright_black()
    );
    if !detail.short_description.is_empty() {
        println!("    {}", detail.short_description);
    }
    if !detail.website_url.is_empty() {
        println!("    {} {}", "Website:".bright_black(), detail.website_url.cyan());
    }
    if !detail.header_image_url.is_empty() {
        println!(
            "    {} {}",
            "Header:".bright_black(),
            detail.header_image_url.bright_black()
        );
    }
    println!();
}

/// Prints the latest news of a game with human-readable dates.
async fn show_news(service: &NewsService, app_id: u32, query: NewsQuery) -> Result<()> {
    println!(
        "{}",
        format!("📰 News for app {}", app_id).bright_blue().bold()
    );
    println!();

    let news = service
        .latest_news_with(app_id, query)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch news: {}", e))?;

    if news.is_empty() {
        println!("{}", "  No news found".yellow());
        return Ok(());
    }

    for item in &news {
        print_news_item(item);
    }

    Ok(())
}

fn print_news_item(item: &NewsItem) {
    println!("  {}", item.title.bright_white().bold());
    println!(
        "  {} · {} · {}",
        format_date(item.published_at).bright_black(),
        item.author.cyan(),
        item.feed_name.bright_black()
    );
    if !item.contents.is_empty() {
        println!("    {}", item.contents);
    }
    println!();
}

/// Formats a unix timestamp as `YYYY-MM-DD HH:MM` UTC.
fn format_date(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .map(|date| date.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}
