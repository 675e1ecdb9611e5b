#![allow(dead_code)]

use axum::{Router, routing::get};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{Map, Value, json};
use std::sync::Arc;
use std::time::Duration;

use game_news_api::api::handlers::health_handler;
use game_news_api::api::routes::steam_routes;
use game_news_api::application::fanout::FanoutPolicy;
use game_news_api::application::services::CatalogSettings;
use game_news_api::domain::gateways::NewsQuery;
use game_news_api::infrastructure::steam::SteamClient;
use game_news_api::state::AppState;

pub const TEST_ORIGIN: &str = "http://localhost:5293";
pub const APP_LIST_PATH: &str = "/ISteamApps/GetAppList/v2/";
pub const APP_DETAILS_PATH: &str = "/api/appdetails";
pub const NEWS_PATH: &str = "/ISteamNews/GetNewsForApp/v0002/";

pub fn test_settings(featured_app_ids: Vec<u32>, detail_batch_limit: usize) -> CatalogSettings {
    CatalogSettings {
        app_list_limit: 100,
        detail_batch_limit,
        featured_app_ids,
        fanout: FanoutPolicy::new(Duration::from_millis(10), 16),
    }
}

/// A client pointed at the stub for both Steam hosts.
pub fn create_test_client(server: &ServerGuard) -> SteamClient {
    SteamClient::with_base_urls(&server.url(), &server.url(), Duration::from_secs(5)).unwrap()
}

pub fn create_test_state(server: &ServerGuard, settings: CatalogSettings) -> AppState {
    AppState::new(
        Arc::new(create_test_client(server)),
        settings,
        NewsQuery {
            count: 3,
            max_length: 300,
        },
    )
}

pub fn create_test_app(state: AppState) -> Router {
    steam_routes()
        .route("/health", get(health_handler))
        .with_state(state)
}

pub fn app_list_body(apps: &[(u32, &str)]) -> String {
    let apps: Vec<Value> = apps
        .iter()
        .map(|(appid, name)| json!({ "appid": appid, "name": name }))
        .collect();

    json!({ "applist": { "apps": apps } }).to_string()
}

pub async fn mock_app_list(server: &mut ServerGuard, apps: &[(u32, &str)]) -> Mock {
    server
        .mock("GET", APP_LIST_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(app_list_body(apps))
        .create_async()
        .await
}

pub async fn mock_app_list_status(server: &mut ServerGuard, status: usize) -> Mock {
    server
        .mock("GET", APP_LIST_PATH)
        .with_status(status)
        .create_async()
        .await
}

/// Body of a successful app-details call, keyed by the id like upstream.
pub fn app_details_body(app_id: u32) -> String {
    let mut payload = Map::new();
    payload.insert(
        app_id.to_string(),
        json!({
            "success": true,
            "data": {
                "type": "game",
                "name": format!("Game {app_id}"),
                "steam_appid": app_id,
                "short_description": format!("Short description of {app_id}"),
                "header_image": format!("https://cdn.example.com/{app_id}/header.jpg"),
                "website": null,
                "is_free": true
            }
        }),
    );

    Value::Object(payload).to_string()
}

pub async fn mock_app_details(server: &mut ServerGuard, app_id: u32) -> Mock {
    mock_app_details_body(server, app_id, 200, app_details_body(app_id)).await
}

/// Unknown ids: upstream answers 200 without a `data` field.
pub async fn mock_app_details_missing(server: &mut ServerGuard, app_id: u32) -> Mock {
    let mut payload = Map::new();
    payload.insert(app_id.to_string(), json!({ "success": false }));

    mock_app_details_body(server, app_id, 200, Value::Object(payload).to_string()).await
}

pub async fn mock_app_details_body(
    server: &mut ServerGuard,
    app_id: u32,
    status: usize,
    body: String,
) -> Mock {
    server
        .mock("GET", APP_DETAILS_PATH)
        .match_query(Matcher::UrlEncoded("appids".into(), app_id.to_string()))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

pub async fn mock_news(server: &mut ServerGuard, app_id: u32, status: usize, body: &str) -> Mock {
    server
        .mock("GET", NEWS_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("appid".into(), app_id.to_string()),
            Matcher::UrlEncoded("count".into(), "3".into()),
            Matcher::UrlEncoded("maxlength".into(), "300".into()),
            Matcher::UrlEncoded("format".into(), "json".into()),
        ]))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}
