//! DTOs for registration and login.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::User;

/// Credentials submitted to `/register` and `/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

impl CredentialsRequest {
    /// Trims surrounding whitespace from the username.
    pub fn normalized(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            password: self.password,
        }
    }
}

/// Public view of a user. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub created_on: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_on: user.created_on,
        }
    }
}

/// Successful login: a Bearer token for the protected endpoints.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: &'static str,
    pub user_id: i64,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_trims_username_only() {
        let request = CredentialsRequest {
            username: "  alice\t".into(),
            password: " correct-horse ".into(),
        }
        .normalized();

        assert_eq!(request.username, "alice");
        assert_eq!(request.password, " correct-horse ");
    }

    #[test]
    fn test_blank_username_fails_validation() {
        let request = CredentialsRequest {
            username: "    ".into(),
            password: "correct-horse".into(),
        }
        .normalized();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
    }
}
