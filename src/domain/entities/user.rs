//! User entity, the owner of URL mappings.

use chrono::{DateTime, Utc};

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

/// Input data for creating a user. The password is already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}
