//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use super::db_error::map_sqlx_error;
use crate::domain::StoreError;
use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;

#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
    created_on: DateTime<Utc>,
    updated_on: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        Self {
            id: r.id,
            username: r.username,
            password_hash: r.password_hash,
            created_on: r.created_on,
            updated_on: r.updated_on,
        }
    }
}

pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        let row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, password_hash, created_on, updated_on
            "#,
        )
        .bind(&new_user.username)
        .bind(&new_user.password_hash)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.into())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username, password_hash, created_on, updated_on
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username, password_hash, created_on, updated_on
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Into::into))
    }
}
