mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_redirect_success() {
    let (server, _) = common::create_test_server();
    let token = common::register_and_login(&server, "alice").await;

    let created: Value = server
        .post("/api/v1/urlMapping")
        .add_header("Authorization", common::bearer(&token))
        .json(&json!({ "origin_url": "https://example.com/target" }))
        .await
        .json();
    let id = created["id"].as_str().unwrap();

    let response = server.get(&format!("/{id}")).await;

    assert_eq!(response.status_code(), 302);
    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _) = common::create_test_server();

    let response = server.get("/zzzzzz").await;

    assert_eq!(response.status_code(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["details"]["kind"], "url_mapping");
}

#[tokio::test]
async fn test_redirect_counts_clicks() {
    let (server, _) = common::create_test_server();
    let token = common::register_and_login(&server, "alice").await;

    let created: Value = server
        .post("/api/v1/urlMapping")
        .add_header("Authorization", common::bearer(&token))
        .json(&json!({ "origin_url": "https://example.com" }))
        .await
        .json();
    let id = created["id"].as_str().unwrap().to_string();

    for _ in 0..3 {
        assert_eq!(server.get(&format!("/{id}")).await.status_code(), 302);
    }

    let details: Value = server
        .get(&format!("/api/v1/urlMapping/{id}/details"))
        .add_header("Authorization", common::bearer(&token))
        .await
        .json();

    assert_eq!(details["click_count"], 3);
}
