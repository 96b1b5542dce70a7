//! Repository trait for URL mappings and their action records.

use crate::domain::entities::{ActionRecord, NewUrlMapping, UrlMapping};
use crate::domain::error::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Store interface for mappings and their paired action records.
///
/// The two record kinds are always created together, so implementations
/// must make [`MappingRepository::create`] atomic: either both records
/// exist afterwards or neither does.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL
/// - [`crate::infrastructure::memory::InMemoryMappingRepository`] - in-process
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Creates a mapping and its zero-initialised action record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if a mapping with the same id exists.
    /// Nothing is persisted in that case.
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, StoreError>;

    /// Returns whether a mapping with this id exists.
    async fn exists(&self, id: &str) -> Result<bool, StoreError>;

    /// Finds a mapping by its short code.
    async fn find_by_id(&self, id: &str) -> Result<Option<UrlMapping>, StoreError>;

    /// Finds the action record paired with a mapping.
    async fn find_action_record(&self, id: &str) -> Result<Option<ActionRecord>, StoreError>;

    /// Atomically records one visit on the mapping's action record.
    ///
    /// Increments `click_count` by exactly one and moves `last_access` to
    /// `at` unless it is already later. Concurrent calls for the same id
    /// must never lose an increment.
    ///
    /// Returns `Ok(None)` and changes nothing if no action record exists.
    async fn record_visit(
        &self,
        id: &str,
        at: DateTime<Utc>,
    ) -> Result<Option<ActionRecord>, StoreError>;

    /// Lists mappings owned by a user, newest first.
    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<UrlMapping>, StoreError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
