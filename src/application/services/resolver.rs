//! Short code resolution with click tracking.

use std::sync::Arc;
use std::time::Duration;

use crate::application::error::ServiceError;
use crate::domain::StoreError;
use crate::domain::repositories::MappingRepository;
use chrono::Utc;
use tokio::time;
use tracing::{debug, warn};

/// Default bound on each store call made while resolving.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolves short codes to their target URLs and records each visit.
///
/// The mapping lookup and the visit increment are issued together and
/// joined before [`RedirectResolver::resolve`] returns. A failed lookup wins
/// over whatever the increment reports and cancels it if still in flight.
pub struct RedirectResolver<R: MappingRepository + ?Sized> {
    repository: Arc<R>,
    store_timeout: Duration,
}

impl<R: MappingRepository + ?Sized> RedirectResolver<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }

    /// Returns the target URL of `mapping_id` and counts one visit.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::MappingNotFound`] if no mapping has this id
    /// - [`ServiceError::ActionRecordNotFound`] if the mapping exists but its
    ///   action record does not
    /// - [`ServiceError::Store`] on store failure or timeout
    pub async fn resolve(&self, mapping_id: &str) -> Result<String, ServiceError> {
        let now = Utc::now();

        let lookup = bounded(
            self.store_timeout,
            "find_by_id",
            self.repository.find_by_id(mapping_id),
        );
        let visit = bounded(
            self.store_timeout,
            "record_visit",
            self.repository.record_visit(mapping_id, now),
        );
        tokio::pin!(lookup);
        tokio::pin!(visit);

        let mut visited = None;
        let looked_up = loop {
            tokio::select! {
                biased;
                res = &mut lookup => break res,
                res = &mut visit, if visited.is_none() => visited = Some(res),
            }
        };

        let mapping = match looked_up {
            Ok(Some(mapping)) => mapping,
            Ok(None) => {
                debug!(code = %mapping_id, "short code not found");
                return Err(ServiceError::MappingNotFound(mapping_id.to_string()));
            }
            Err(e) => {
                warn!(code = %mapping_id, error = %e, "mapping lookup failed");
                return Err(e.into());
            }
        };

        let visited = match visited {
            Some(res) => res,
            None => visit.await,
        };

        match visited {
            Ok(Some(record)) => {
                debug!(
                    code = %mapping_id,
                    clicks = record.click_count,
                    "redirect resolved"
                );
                Ok(mapping.origin_url)
            }
            Ok(None) => {
                warn!(code = %mapping_id, "mapping has no action record");
                Err(ServiceError::ActionRecordNotFound(mapping_id.to_string()))
            }
            Err(e) => {
                warn!(code = %mapping_id, error = %e, "recording visit failed");
                Err(e.into())
            }
        }
    }
}

/// Runs a store call under `limit`, reporting an elapsed limit as a timeout.
async fn bounded<T>(
    limit: Duration,
    operation: &'static str,
    call: impl Future<Output = Result<T, StoreError>>,
) -> Result<T, StoreError> {
    time::timeout(limit, call)
        .await
        .map_err(|_| StoreError::Timeout(operation.to_string()))?
}
