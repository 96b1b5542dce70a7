//! Repository trait for user accounts.

use crate::domain::entities::{NewUser, User};
use crate::domain::error::StoreError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if the username is already taken.
    async fn create(&self, new_user: NewUser) -> Result<User, StoreError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;
}
