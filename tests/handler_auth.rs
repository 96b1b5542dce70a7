mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_register_success() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/api/v1/register")
        .json(&json!({ "username": "alice", "password": "correct-horse" }))
        .await;

    assert_eq!(response.status_code(), 201);
    let body: Value = response.json();
    assert_eq!(body["username"], "alice");
    assert!(body["id"].is_i64());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let (server, _) = common::create_test_server();
    let credentials = json!({ "username": "alice", "password": "correct-horse" });

    server.post("/api/v1/register").json(&credentials).await;
    let response = server.post("/api/v1/register").json(&credentials).await;

    assert_eq!(response.status_code(), 409);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "conflict");
}

#[tokio::test]
async fn test_register_validation() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/api/v1/register")
        .json(&json!({ "username": "al", "password": "short" }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(body["error"]["details"]["username"].is_array());
    assert!(body["error"]["details"]["password"].is_array());
}

#[tokio::test]
async fn test_login_success() {
    let (server, _) = common::create_test_server();
    let credentials = json!({ "username": "bob", "password": "correct-horse" });

    server.post("/api/v1/register").json(&credentials).await;
    let response = server.post("/api/v1/login").json(&credentials).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["username"], "bob");
    let token = body["token"].as_str().unwrap();
    assert!(token.starts_with(&format!("{}.", body["user_id"])));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let (server, _) = common::create_test_server();

    server
        .post("/api/v1/register")
        .json(&json!({ "username": "bob", "password": "correct-horse" }))
        .await;
    let response = server
        .post("/api/v1/login")
        .json(&json!({ "username": "bob", "password": "wrong-horse" }))
        .await;

    assert_eq!(response.status_code(), 401);
    assert_eq!(response.header("www-authenticate"), "Bearer");
}

#[tokio::test]
async fn test_login_unknown_user() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/api/v1/login")
        .json(&json!({ "username": "nobody", "password": "whatever-pass" }))
        .await;

    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn test_register_blank_username() {
    let (server, _) = common::create_test_server();

    let response = server
        .post("/api/v1/register")
        .json(&json!({ "username": "   ", "password": "correct-horse-battery" }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert!(body["error"]["details"]["username"].is_array());
}

#[tokio::test]
async fn test_register_padded_username_conflicts() {
    let (server, _) = common::create_test_server();

    let first = server
        .post("/api/v1/register")
        .json(&json!({ "username": "alice", "password": "correct-horse" }))
        .await;
    assert_eq!(first.status_code(), 201);

    let response = server
        .post("/api/v1/register")
        .json(&json!({ "username": " alice", "password": "correct-horse" }))
        .await;

    assert_eq!(response.status_code(), 409);
}

#[tokio::test]
async fn test_login_trims_username() {
    let (server, _) = common::create_test_server();

    server
        .post("/api/v1/register")
        .json(&json!({ "username": "carol", "password": "correct-horse" }))
        .await;
    let response = server
        .post("/api/v1/login")
        .json(&json!({ "username": "  carol ", "password": "correct-horse" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["username"], "carol");
}
