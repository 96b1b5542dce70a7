//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use super::db_error::map_sqlx_error;
use crate::domain::StoreError;
use crate::domain::entities::{ActionRecord, NewUrlMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;

#[derive(FromRow)]
struct MappingRow {
    id: String,
    origin_url: String,
    owner_id: i64,
    created_on: DateTime<Utc>,
    updated_on: DateTime<Utc>,
}

impl From<MappingRow> for UrlMapping {
    fn from(r: MappingRow) -> Self {
        Self {
            id: r.id,
            origin_url: r.origin_url,
            owner_id: r.owner_id,
            created_on: r.created_on,
            updated_on: r.updated_on,
        }
    }
}

#[derive(FromRow)]
struct ActionRecordRow {
    id: i64,
    url_mapping_id: String,
    click_count: i64,
    last_access: DateTime<Utc>,
    created_on: DateTime<Utc>,
    updated_on: DateTime<Utc>,
}

impl From<ActionRecordRow> for ActionRecord {
    fn from(r: ActionRecordRow) -> Self {
        Self {
            id: r.id,
            url_mapping_id: r.url_mapping_id,
            click_count: r.click_count,
            last_access: r.last_access,
            created_on: r.created_on,
            updated_on: r.updated_on,
        }
    }
}

/// PostgreSQL repository for URL mappings and action records.
///
/// Visit counting is a single `UPDATE ... SET click_count = click_count + 1`,
/// so concurrent redirects are serialised by the row lock.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, StoreError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let mapping: MappingRow = sqlx::query_as(
            r#"
            INSERT INTO url_mappings (id, origin_url, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, origin_url, user_id AS owner_id, created_on, updated_on
            "#,
        )
        .bind(&new_mapping.id)
        .bind(&new_mapping.origin_url)
        .bind(new_mapping.owner_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        sqlx::query(
            r#"
            INSERT INTO url_mapping_action_records
                (url_mapping_id, click_count, last_access, created_on, updated_on)
            VALUES ($1, 0, $2, $2, $2)
            "#,
        )
        .bind(&mapping.id)
        .bind(mapping.created_on)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;

        Ok(mapping.into())
    }

    async fn exists(&self, id: &str) -> Result<bool, StoreError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM url_mappings WHERE id = $1)")
            .bind(id)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UrlMapping>, StoreError> {
        let row: Option<MappingRow> = sqlx::query_as(
            r#"
            SELECT id, origin_url, user_id AS owner_id, created_on, updated_on
            FROM url_mappings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_action_record(&self, id: &str) -> Result<Option<ActionRecord>, StoreError> {
        let row: Option<ActionRecordRow> = sqlx::query_as(
            r#"
            SELECT id, url_mapping_id, click_count, last_access, created_on, updated_on
            FROM url_mapping_action_records
            WHERE url_mapping_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Into::into))
    }

    async fn record_visit(
        &self,
        id: &str,
        at: DateTime<Utc>,
    ) -> Result<Option<ActionRecord>, StoreError> {
        let row: Option<ActionRecordRow> = sqlx::query_as(
            r#"
            UPDATE url_mapping_action_records
            SET click_count = click_count + 1,
                last_access = GREATEST(last_access, $2),
                updated_on = $2
            WHERE url_mapping_id = $1
            RETURNING id, url_mapping_id, click_count, last_access, created_on, updated_on
            "#,
        )
        .bind(id)
        .bind(at)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(Into::into))
    }

    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<UrlMapping>, StoreError> {
        let rows: Vec<MappingRow> = sqlx::query_as(
            r#"
            SELECT id, origin_url, user_id AS owner_id, created_on, updated_on
            FROM url_mappings
            WHERE user_id = $1
            ORDER BY created_on DESC, id
            "#,
        )
        .bind(owner_id)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}
