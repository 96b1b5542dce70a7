//! Read-only queries over URL mappings.

use std::sync::Arc;

use crate::application::error::ServiceError;
use crate::domain::entities::{ActionRecord, UrlMapping};
use crate::domain::repositories::MappingRepository;

/// A mapping together with its click statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingDetails {
    pub mapping: UrlMapping,
    pub action_record: ActionRecord,
}

pub struct MappingService<R: MappingRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: MappingRepository + ?Sized> MappingService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists mappings created by `owner_id`, newest first.
    pub async fn list_for_owner(&self, owner_id: i64) -> Result<Vec<UrlMapping>, ServiceError> {
        Ok(self.repository.list_by_owner(owner_id).await?)
    }

    /// Fetches a mapping and its action record without recording a visit.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::MappingNotFound`] or
    /// [`ServiceError::ActionRecordNotFound`] when either half is missing.
    pub async fn details(&self, mapping_id: &str) -> Result<MappingDetails, ServiceError> {
        let (mapping, action_record) = tokio::try_join!(
            self.repository.find_by_id(mapping_id),
            self.repository.find_action_record(mapping_id),
        )?;

        let mapping =
            mapping.ok_or_else(|| ServiceError::MappingNotFound(mapping_id.to_string()))?;
        let action_record = action_record
            .ok_or_else(|| ServiceError::ActionRecordNotFound(mapping_id.to_string()))?;

        Ok(MappingDetails {
            mapping,
            action_record,
        })
    }

    /// Checks that the underlying store answers.
    pub async fn ping(&self) -> Result<(), ServiceError> {
        Ok(self.repository.ping().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StoreError;
    use crate::domain::repositories::MockMappingRepository;
    use chrono::{Duration, Utc};

    fn mapping(id: &str, minutes_ago: i64) -> UrlMapping {
        let at = Utc::now() - Duration::minutes(minutes_ago);
        UrlMapping {
            id: id.to_string(),
            origin_url: format!("https://example.com/{id}"),
            owner_id: 5,
            created_on: at,
            updated_on: at,
        }
    }

    #[tokio::test]
    async fn test_list_for_owner() {
        let mut repo = MockMappingRepository::new();

        repo.expect_list_by_owner()
            .withf(|owner| *owner == 5)
            .times(1)
            .returning(|_| Ok(vec![mapping("newer1", 1), mapping("older1", 10)]));

        let service = MappingService::new(Arc::new(repo));
        let mappings = service.list_for_owner(5).await.unwrap();

        assert_eq!(mappings.len(), 2);
        assert_eq!(mappings[0].id, "newer1");
    }

    #[tokio::test]
    async fn test_details_found() {
        let mut repo = MockMappingRepository::new();

        repo.expect_find_by_id()
            .returning(|id| Ok(Some(mapping(id, 0))));
        repo.expect_find_action_record().returning(|id| {
            let mut record = ActionRecord::initial(9, id, Utc::now());
            record.click_count = 4;
            Ok(Some(record))
        });
        repo.expect_record_visit().times(0);

        let service = MappingService::new(Arc::new(repo));
        let details = service.details("abc123").await.unwrap();

        assert_eq!(details.mapping.id, "abc123");
        assert_eq!(details.action_record.click_count, 4);
    }

    #[tokio::test]
    async fn test_details_missing_mapping() {
        let mut repo = MockMappingRepository::new();

        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_find_action_record().returning(|_| Ok(None));

        let service = MappingService::new(Arc::new(repo));
        let err = service.details("zzzzzz").await.unwrap_err();

        assert_eq!(err, ServiceError::MappingNotFound("zzzzzz".into()));
    }

    #[tokio::test]
    async fn test_details_missing_action_record() {
        let mut repo = MockMappingRepository::new();

        repo.expect_find_by_id()
            .returning(|id| Ok(Some(mapping(id, 0))));
        repo.expect_find_action_record().returning(|_| Ok(None));

        let service = MappingService::new(Arc::new(repo));
        let err = service.details("abc123").await.unwrap_err();

        assert_eq!(err, ServiceError::ActionRecordNotFound("abc123".into()));
    }

    #[tokio::test]
    async fn test_details_store_error() {
        let mut repo = MockMappingRepository::new();

        repo.expect_find_by_id()
            .returning(|_| Err(StoreError::Unavailable("down".into())));
        repo.expect_find_action_record()
            .times(0..=1)
            .returning(|_| Ok(None));

        let service = MappingService::new(Arc::new(repo));
        let err = service.details("abc123").await.unwrap_err();

        assert!(matches!(err, ServiceError::Store(StoreError::Unavailable(_))));
    }
}
