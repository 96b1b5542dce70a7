#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::{Value, json};
use shorten_url::infrastructure::memory::{InMemoryMappingRepository, InMemoryUserRepository};
use shorten_url::routes::router;
use shorten_url::state::{AppState, StateOptions};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

pub const BASE_URL: &str = "http://sho.rt";

pub fn test_options() -> StateOptions {
    StateOptions {
        base_url: BASE_URL.to_string(),
        session_secret: "test-signing-secret".to_string(),
        allocation_max_attempts: 10,
        store_timeout: Duration::from_secs(5),
    }
}

/// State over fresh in-memory stores, returned with the mapping store so
/// tests can inspect it directly.
pub fn create_memory_state() -> (AppState, Arc<InMemoryMappingRepository>) {
    let mappings = Arc::new(InMemoryMappingRepository::new());
    let users = Arc::new(InMemoryUserRepository::new());

    let state = AppState::new(mappings.clone(), users, test_options());

    (state, mappings)
}

pub fn create_test_server() -> (TestServer, Arc<InMemoryMappingRepository>) {
    let (state, mappings) = create_memory_state();
    let server = TestServer::new(router(state)).unwrap();

    (server, mappings)
}

/// Registers `username` and returns a Bearer token for it.
pub async fn register_and_login(server: &TestServer, username: &str) -> String {
    let credentials = json!({ "username": username, "password": "correct-horse-battery" });

    server
        .post("/api/v1/register")
        .json(&credentials)
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server.post("/api/v1/login").json(&credentials).await;
    response.assert_status_ok();

    let body: Value = response.json();
    body["token"].as_str().unwrap().to_string()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Inserts a user row directly and returns its id.
pub async fn create_test_user(pool: &PgPool, username: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO users (username, password_hash) VALUES ($1, 'not-a-real-hash') RETURNING id",
    )
    .bind(username)
    .fetch_one(pool)
    .await
    .unwrap()
}
