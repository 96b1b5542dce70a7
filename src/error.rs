//! HTTP error type and the translation of service failures into responses.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::application::ServiceError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Conflict { message: String, details: Value },
    Unauthorized { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Unauthorized { message, details } => ("unauthorized", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        if status == StatusCode::UNAUTHORIZED {
            return (
                status,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(body),
            )
                .into_response();
        }

        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::MappingNotFound(id) => AppError::not_found(
                "Short URL not found",
                json!({ "kind": "url_mapping", "id": id }),
            ),
            ServiceError::ActionRecordNotFound(id) => AppError::not_found(
                "Action record not found",
                json!({ "kind": "action_record", "id": id }),
            ),
            ServiceError::UsernameTaken(username) => AppError::conflict(
                "Username already taken",
                json!({ "username": username }),
            ),
            ServiceError::InvalidCredentials => AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid username or password" }),
            ),
            ServiceError::InvalidToken => AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid or expired token" }),
            ),
            ServiceError::CapacityExhausted { attempts } => {
                tracing::error!(attempts, "short code space exhausted");
                AppError::internal(
                    "Could not allocate a short code",
                    json!({ "attempts": attempts }),
                )
            }
            ServiceError::PasswordHash(msg) => {
                tracing::error!(error = %msg, "password hashing failed");
                AppError::internal("Internal server error", json!({}))
            }
            ServiceError::Store(store) => {
                tracing::error!(error = %store, "store error");
                AppError::internal("Database error", json!({}))
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        let details = e
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let messages: Vec<String> = errors
                    .iter()
                    .map(|err| {
                        err.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| err.code.to_string())
                    })
                    .collect();
                (field.to_string(), json!(messages))
            })
            .collect::<serde_json::Map<_, _>>();

        AppError::bad_request("Validation failed", Value::Object(details))
    }
}
