//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// The authenticated caller, inserted into request extensions by [`layer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
}

/// Authenticates requests using session tokens from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <user_id>.<mac>
/// ```
///
/// Tokens are issued by `POST /api/v1/login`. On success the caller is made
/// available to handlers as `Extension<CurrentUser>`.
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing
/// - Token format is invalid or the MAC does not verify
/// - The user no longer exists
///
/// Adds `WWW-Authenticate: Bearer` header to 401 responses per RFC 6750.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let user_id = st.auth_service.authenticate(&token).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CurrentUser { id: user_id });

    Ok(next.run(req).await)
}
