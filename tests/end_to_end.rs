mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use regex::Regex;
use serde_json::json;
use shortcuts::routes::app_router;
use tower::ServiceExt;

#[tokio::test]
async fn test_shortcut_lifecycle() {
    let (server, _store) = common::create_test_server();

    let response = server
        .post("/api/shortcuts")
        .add_header("Host", common::TEST_HOST)
        .json(&json!({ "destination": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let name = json["data"]["shortcut"].as_str().unwrap().to_string();
    let url = json["data"]["URL"].as_str().unwrap();
    let edit = json["data"]["edit"].as_str().unwrap();

    assert!(Regex::new(r"^[A-Za-z0-9]{6}$").unwrap().is_match(&name));
    assert!(url.ends_with(&name));
    assert!(edit.contains("?key="));

    let key = edit.split("?key=").nth(1).unwrap().to_string();
    assert_eq!(key.len(), 18);

    let redirect = server.get(&format!("/{name}")).await;
    redirect.assert_status(StatusCode::FOUND);
    assert_eq!(redirect.header("location"), "https://example.com/");

    server
        .delete(&format!("/api/shortcuts/{name}"))
        .add_header("Authorization", "Bearer not-the-key")
        .await
        .assert_status_unauthorized();

    server
        .delete(&format!("/api/shortcuts/{name}"))
        .add_header("Authorization", format!("Bearer {key}"))
        .await
        .assert_status_ok();

    server
        .get(&format!("/{name}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_recreated_name_gets_a_new_key() {
    let (server, _store) = common::create_test_server();

    let first = server
        .post("/api/shortcuts")
        .add_header("Host", common::TEST_HOST)
        .json(&json!({ "destination": "https://example.com/a", "name": "reuse" }))
        .await;
    first.assert_status(StatusCode::CREATED);
    let first_edit = first.json::<serde_json::Value>()["data"]["edit"]
        .as_str()
        .unwrap()
        .to_string();
    let first_key = first_edit.split("?key=").nth(1).unwrap().to_string();

    server
        .delete("/api/shortcuts/reuse")
        .add_header("Authorization", format!("Bearer {first_key}"))
        .await
        .assert_status_ok();

    let second = server
        .post("/api/shortcuts")
        .add_header("Host", common::TEST_HOST)
        .json(&json!({ "destination": "https://example.com/b", "name": "reuse" }))
        .await;
    second.assert_status(StatusCode::CREATED);

    // The old key died with the old shortcut.
    server
        .delete("/api/shortcuts/reuse")
        .add_header("Authorization", format!("Bearer {first_key}"))
        .await
        .assert_status_unauthorized();

    let redirect = server.get("/reuse").await;
    assert_eq!(redirect.header("location"), "https://example.com/b");
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let (state, store) = common::create_test_state();
    common::create_test_shortcut(&store, "slash", "https://example.com").await;

    let response = app_router(state)
        .oneshot(Request::builder().uri("/slash/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
}
