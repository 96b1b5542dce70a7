//! Handlers for user registration and login.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::auth::{CredentialsRequest, LoginResponse, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user.
///
/// # Endpoint
///
/// `POST /api/v1/register`
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "password": "correct-horse" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails, 409 Conflict if the username
/// is already taken. The username is trimmed before either check.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let payload = payload.normalized();
    payload.validate()?;

    let user = state
        .auth_service
        .register(&payload.username, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Exchanges credentials for a Bearer token.
///
/// # Endpoint
///
/// `POST /api/v1/login`
///
/// # Response
///
/// ```json
/// { "token": "1.5f0c…", "token_type": "Bearer", "user_id": 1, "username": "alice" }
/// ```
///
/// # Errors
///
/// Returns 401 Unauthorized for an unknown user or a wrong password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let payload = payload.normalized();
    payload.validate()?;

    let user = state
        .auth_service
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        token: state.auth_service.issue_token(user.id),
        token_type: "Bearer",
        user_id: user.id,
        username: user.username,
    }))
}
