//! API route configuration.
//!
//! Public account endpoints plus mapping endpoints protected by Bearer token
//! authentication via [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_mapping_handler, list_mappings_handler, login_handler, mapping_details_handler,
    register_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Account endpoints, reachable without a token.
///
/// # Endpoints
///
/// - `POST /register` - Create a user
/// - `POST /login`    - Exchange credentials for a token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
}

/// Mapping endpoints. Callers must attach the auth layer.
///
/// # Endpoints
///
/// - `POST /urlMapping`              - Shorten a URL
/// - `GET  /urlMapping`              - List own mappings
/// - `GET  /urlMapping/{id}/details` - Mapping with click statistics
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/urlMapping",
            post(create_mapping_handler).get(list_mappings_handler),
        )
        .route("/urlMapping/{id}/details", get(mapping_details_handler))
}
