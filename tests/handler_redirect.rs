mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_redirect_success() {
    let (server, store) = common::create_test_server();
    common::create_test_shortcut(&store, "docs", "https://example.com/target").await;

    let response = server.get("/docs").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/notfound").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "No shortcut with name notfound found");
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let (server, store) = common::create_test_server();
    common::create_test_shortcut(&store, "AbC123", "https://example.com").await;

    server.get("/AbC123").await.assert_status(StatusCode::FOUND);
    server.get("/abc123").await.assert_status_not_found();
}

#[tokio::test]
async fn test_health_is_not_a_shortcut() {
    let (server, _store) = common::create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert_eq!(json["checks"]["storage"]["message"], "Reachable");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}
