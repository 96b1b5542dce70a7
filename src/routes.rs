//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{id}`        - Short URL redirect (public)
//! - `GET  /health`      - Store health check (public)
//! - `/api/v1/*`         - REST API (mapping endpoints require a Bearer token)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer session token on mapping endpoints
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes and middleware without path normalization.
pub fn router(state: AppState) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let api_v1 = Router::new()
        .merge(api::routes::public_routes())
        .merge(protected);

    Router::new()
        .route("/health", get(health_handler))
        .route("/{id}", get(redirect_handler))
        .nest("/api/v1", api_v1)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with trailing slashes trimmed.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
