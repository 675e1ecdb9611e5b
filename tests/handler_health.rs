mod common;

use axum_test::TestServer;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = mockito::Server::new_async().await;
    let state = common::create_test_state(&server, common::test_settings(vec![], 3));
    let app = common::create_test_app(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_does_not_call_upstream() {
    let mut upstream = mockito::Server::new_async().await;
    let untouched = upstream
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let state = common::create_test_state(&upstream, common::test_settings(vec![], 3));
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    server.get("/health").await.assert_status_ok();

    untouched.assert_async().await;
}
