//! In-process user store backed by `DashMap`.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::StoreError;
use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;

/// In-memory implementation of [`UserRepository`], keyed by username with
/// a secondary id index.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: DashMap<String, User>,
    usernames_by_id: DashMap<i64, String>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            usernames_by_id: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        match self.users.entry(new_user.username.clone()) {
            Entry::Occupied(_) => Err(StoreError::Conflict(new_user.username)),
            Entry::Vacant(slot) => {
                let now = Utc::now();
                let user = User {
                    id: self.next_id.fetch_add(1, Ordering::Relaxed),
                    username: new_user.username,
                    password_hash: new_user.password_hash,
                    created_on: now,
                    updated_on: now,
                };
                slot.insert(user.clone());
                self.usernames_by_id.insert(user.id, user.username.clone());
                Ok(user)
            }
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.get(username).map(|u| u.clone()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let Some(username) = self.usernames_by_id.get(&id).map(|u| u.clone()) else {
            return Ok(None);
        };
        Ok(self.users.get(&username).map(|u| u.clone()))
    }
}
