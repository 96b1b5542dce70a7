//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its origin URL and counts the visit.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// # Request Flow
///
/// 1. Look up the mapping and increment its click count concurrently
/// 2. Join both store calls
/// 3. Return 302 Found with `Location: origin_url`
///
/// The path segment is treated as an opaque code; codes that could never
/// have been generated simply miss.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or its action record is
/// missing, 500 on store failure or timeout.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let origin_url = state.resolver.resolve(&id).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, origin_url)]))
}
