//! In-process mapping store backed by `DashMap`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry as MapEntry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::StoreError;
use crate::domain::entities::{ActionRecord, NewUrlMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;

/// A mapping and its action record, stored under one key so they are
/// created together and never observed apart.
#[derive(Debug, Clone)]
struct Entry {
    mapping: UrlMapping,
    action: ActionRecord,
}

/// In-memory implementation of [`MappingRepository`].
///
/// Uniqueness comes from the map's entry API and visits are applied under
/// the shard write lock, so concurrent increments are never lost.
#[derive(Debug)]
pub struct InMemoryMappingRepository {
    storage: DashMap<String, Entry>,
    next_action_id: AtomicI64,
}

impl InMemoryMappingRepository {
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
            next_action_id: AtomicI64::new(1),
        }
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl Default for InMemoryMappingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, StoreError> {
        match self.storage.entry(new_mapping.id.clone()) {
            MapEntry::Occupied(_) => Err(StoreError::Conflict(new_mapping.id)),
            MapEntry::Vacant(slot) => {
                let now = Utc::now();
                let action_id = self.next_action_id.fetch_add(1, Ordering::Relaxed);
                let mapping = UrlMapping {
                    id: new_mapping.id,
                    origin_url: new_mapping.origin_url,
                    owner_id: new_mapping.owner_id,
                    created_on: now,
                    updated_on: now,
                };
                let action = ActionRecord::initial(action_id, mapping.id.clone(), now);

                slot.insert(Entry {
                    mapping: mapping.clone(),
                    action,
                });

                Ok(mapping)
            }
        }
    }

    async fn exists(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.storage.contains_key(id))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UrlMapping>, StoreError> {
        Ok(self.storage.get(id).map(|e| e.mapping.clone()))
    }

    async fn find_action_record(&self, id: &str) -> Result<Option<ActionRecord>, StoreError> {
        Ok(self.storage.get(id).map(|e| e.action.clone()))
    }

    async fn record_visit(
        &self,
        id: &str,
        at: DateTime<Utc>,
    ) -> Result<Option<ActionRecord>, StoreError> {
        let Some(mut entry) = self.storage.get_mut(id) else {
            return Ok(None);
        };

        entry.action.visit(at);

        Ok(Some(entry.action.clone()))
    }

    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<UrlMapping>, StoreError> {
        let mut mappings: Vec<UrlMapping> = self
            .storage
            .iter()
            .filter(|e| e.mapping.owner_id == owner_id)
            .map(|e| e.mapping.clone())
            .collect();

        mappings.sort_by(|a, b| {
            b.created_on
                .cmp(&a.created_on)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(mappings)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
