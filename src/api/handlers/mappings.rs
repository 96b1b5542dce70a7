//! Handlers for creating and inspecting URL mappings.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::mapping::{
    CreateMappingRequest, MappingDetailsResponse, MappingListResponse, MappingResponse,
};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short code for a URL, owned by the calling user.
///
/// # Endpoint
///
/// `POST /api/v1/urlMapping`
///
/// # Request Body
///
/// ```json
/// { "origin_url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "id": "aZ3k9Q",
///   "short_url": "http://localhost:8080/aZ3k9Q",
///   "origin_url": "https://example.com/some/long/path",
///   "created_on": "2024-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails and 500 if no free code was
/// found within the retry budget.
pub async fn create_mapping_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CreateMappingRequest>,
) -> Result<(StatusCode, Json<MappingResponse>), AppError> {
    let payload = payload.normalized();
    payload.validate()?;

    let mapping = state
        .allocator
        .allocate(&payload.origin_url, user.id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MappingResponse::from_mapping(mapping, &state.base_url)),
    ))
}

/// Lists the calling user's mappings, newest first.
///
/// # Endpoint
///
/// `GET /api/v1/urlMapping`
pub async fn list_mappings_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<MappingListResponse>, AppError> {
    let items: Vec<MappingResponse> = state
        .mapping_service
        .list_for_owner(user.id)
        .await?
        .into_iter()
        .map(|m| MappingResponse::from_mapping(m, &state.base_url))
        .collect();

    Ok(Json(MappingListResponse {
        total: items.len(),
        items,
    }))
}

/// Returns a mapping with its click count and last access time.
///
/// Reading details does not count as a visit.
///
/// # Endpoint
///
/// `GET /api/v1/urlMapping/{id}/details`
///
/// # Errors
///
/// Returns 404 Not Found if the mapping or its action record is missing.
pub async fn mapping_details_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MappingDetailsResponse>, AppError> {
    let details = state.mapping_service.details(&id).await?;

    Ok(Json(MappingDetailsResponse::from_details(
        details,
        &state.base_url,
    )))
}
