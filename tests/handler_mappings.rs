mod common;

use serde_json::{Value, json};
use shorten_url::domain::repositories::MappingRepository;

#[tokio::test]
async fn test_create_mapping_success() {
    let (server, mappings) = common::create_test_server();
    let token = common::register_and_login(&server, "alice").await;

    let response = server
        .post("/api/v1/urlMapping")
        .add_header("Authorization", common::bearer(&token))
        .json(&json!({ "origin_url": "  https://example.com/a/long/path  " }))
        .await;

    assert_eq!(response.status_code(), 201);
    let body: Value = response.json();
    let id = body["id"].as_str().unwrap();

    assert_eq!(id.len(), 6);
    assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(body["origin_url"], "https://example.com/a/long/path");
    assert_eq!(body["short_url"], format!("{}/{id}", common::BASE_URL));

    let record = mappings.find_action_record(id).await.unwrap().unwrap();
    assert_eq!(record.click_count, 0);
}

#[tokio::test]
async fn test_create_mapping_accepts_non_url_targets() {
    let (server, _) = common::create_test_server();
    let token = common::register_and_login(&server, "alice").await;

    let response = server
        .post("/api/v1/urlMapping")
        .add_header("Authorization", common::bearer(&token))
        .json(&json!({ "origin_url": "not a url at all" }))
        .await;

    assert_eq!(response.status_code(), 201);
}

#[tokio::test]
async fn test_create_mapping_empty_url() {
    let (server, _) = common::create_test_server();
    let token = common::register_and_login(&server, "alice").await;

    let response = server
        .post("/api/v1/urlMapping")
        .add_header("Authorization", common::bearer(&token))
        .json(&json!({ "origin_url": "   " }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_create_mapping_requires_token() {
    let (server, mappings) = common::create_test_server();

    let response = server
        .post("/api/v1/urlMapping")
        .json(&json!({ "origin_url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 401);
    assert!(mappings.is_empty());
}

#[tokio::test]
async fn test_forged_token_rejected() {
    let (server, _) = common::create_test_server();
    common::register_and_login(&server, "alice").await;

    let response = server
        .get("/api/v1/urlMapping")
        .add_header("Authorization", "Bearer 1.deadbeef")
        .await;

    assert_eq!(response.status_code(), 401);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "unauthorized");
}

#[tokio::test]
async fn test_list_only_own_mappings() {
    let (server, _) = common::create_test_server();
    let alice = common::register_and_login(&server, "alice").await;
    let bob = common::register_and_login(&server, "bobby").await;

    for url in ["https://a.example", "https://b.example"] {
        server
            .post("/api/v1/urlMapping")
            .add_header("Authorization", common::bearer(&alice))
            .json(&json!({ "origin_url": url }))
            .await;
    }
    server
        .post("/api/v1/urlMapping")
        .add_header("Authorization", common::bearer(&bob))
        .json(&json!({ "origin_url": "https://bob.example" }))
        .await;

    let response = server
        .get("/api/v1/urlMapping")
        .add_header("Authorization", common::bearer(&alice))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["total"], 2);
    let targets: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["origin_url"].as_str().unwrap())
        .collect();
    assert!(targets.contains(&"https://a.example"));
    assert!(targets.contains(&"https://b.example"));
}

#[tokio::test]
async fn test_details_do_not_count_as_visits() {
    let (server, _) = common::create_test_server();
    let token = common::register_and_login(&server, "alice").await;

    let created: Value = server
        .post("/api/v1/urlMapping")
        .add_header("Authorization", common::bearer(&token))
        .json(&json!({ "origin_url": "https://example.com" }))
        .await
        .json();
    let id = created["id"].as_str().unwrap().to_string();

    for _ in 0..2 {
        let response = server
            .get(&format!("/api/v1/urlMapping/{id}/details"))
            .add_header("Authorization", common::bearer(&token))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["click_count"], 0);
        assert_eq!(body["id"], id.as_str());
    }
}

#[tokio::test]
async fn test_details_not_found() {
    let (server, _) = common::create_test_server();
    let token = common::register_and_login(&server, "alice").await;

    let response = server
        .get("/api/v1/urlMapping/zzzzzz/details")
        .add_header("Authorization", common::bearer(&token))
        .await;

    assert_eq!(response.status_code(), 404);
}
