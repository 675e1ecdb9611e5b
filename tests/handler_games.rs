mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_games_filters_unnamed_entries() {
    let mut upstream = mockito::Server::new_async().await;
    let list = common::mock_app_list(
        &mut upstream,
        &[(10, "Counter-Strike"), (11, ""), (12, "   "), (20, "Team Fortress Classic")],
    )
    .await;

    let state = common::create_test_state(&upstream, common::test_settings(vec![], 3));
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/steamgames").await;

    response.assert_status_ok();
    response.assert_json(&json!([
        { "appid": 10, "name": "Counter-Strike" },
        { "appid": 20, "name": "Team Fortress Classic" }
    ]));
    list.assert_async().await;
}

#[tokio::test]
async fn test_games_truncates_to_list_limit() {
    let mut upstream = mockito::Server::new_async().await;
    let apps: Vec<(u32, String)> = (1..=150).map(|id| (id, format!("App {id}"))).collect();
    let apps: Vec<(u32, &str)> = apps.iter().map(|(id, name)| (*id, name.as_str())).collect();
    common::mock_app_list(&mut upstream, &apps).await;

    let state = common::create_test_state(&upstream, common::test_settings(vec![], 3));
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/steamgames").await;

    response.assert_status_ok();
    let games = response.json::<Vec<serde_json::Value>>();
    assert_eq!(games.len(), 100);
    assert_eq!(games[0]["appid"], 1);
    assert_eq!(games[99]["appid"], 100);
}

#[tokio::test]
async fn test_games_empty_catalogue() {
    let mut upstream = mockito::Server::new_async().await;
    common::mock_app_list(&mut upstream, &[]).await;

    let state = common::create_test_state(&upstream, common::test_settings(vec![], 3));
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/steamgames").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_games_relays_upstream_status_with_empty_body() {
    let mut upstream = mockito::Server::new_async().await;
    common::mock_app_list_status(&mut upstream, 503).await;

    let state = common::create_test_state(&upstream, common::test_settings(vec![], 3));
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/steamgames").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_games_malformed_body_is_internal_error() {
    let mut upstream = mockito::Server::new_async().await;
    upstream
        .mock("GET", common::APP_LIST_PATH)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let state = common::create_test_state(&upstream, common::test_settings(vec![], 3));
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/steamgames").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_games_missing_applist_is_internal_error() {
    let mut upstream = mockito::Server::new_async().await;
    upstream
        .mock("GET", common::APP_LIST_PATH)
        .with_status(200)
        .with_body(r#"{"response":{}}"#)
        .create_async()
        .await;

    let state = common::create_test_state(&upstream, common::test_settings(vec![], 3));
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/steamgames").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_games_upstream_not_modified_is_bad_gateway() {
    let mut upstream = mockito::Server::new_async().await;
    common::mock_app_list_status(&mut upstream, 304).await;

    let state = common::create_test_state(&upstream, common::test_settings(vec![], 3));
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/steamgames").await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert!(response.text().is_empty());
}
