//! Short code allocation for new URL mappings.

use std::sync::Arc;

use crate::application::error::ServiceError;
use crate::domain::StoreError;
use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::MappingRepository;
use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
use tracing::{debug, info, warn};

/// Default number of codes tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Allocates unique short codes and creates mappings.
///
/// The store's uniqueness constraint on the mapping id is the authoritative
/// guard. The `exists` pre-check only avoids a failed write in the common
/// collision case; a conflict reported by `create` (another allocator took
/// the code between check and write) is retried like a pre-check hit.
pub struct CodeAllocator<R: MappingRepository + ?Sized> {
    repository: Arc<R>,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: usize,
}

impl<R: MappingRepository + ?Sized> CodeAllocator<R> {
    /// Creates an allocator using random codes and [`DEFAULT_MAX_ATTEMPTS`].
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            generator: Arc::new(RandomCodeGenerator),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Replaces the code generator.
    pub fn with_generator(mut self, generator: Arc<dyn CodeGenerator>) -> Self {
        self.generator = generator;
        self
    }

    /// Sets the retry budget. Values below 1 are raised to 1.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Creates a mapping from a fresh short code to `origin_url`.
    ///
    /// The mapping and its zero-initialised action record are persisted in a
    /// single store operation.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::CapacityExhausted`] if every attempted code was
    /// taken, or [`ServiceError::Store`] on any other store failure.
    pub async fn allocate(
        &self,
        origin_url: &str,
        owner_id: i64,
    ) -> Result<UrlMapping, ServiceError> {
        for attempt in 1..=self.max_attempts {
            let code = self.generator.generate();

            if self.repository.exists(&code).await? {
                debug!(code = %code, attempt, "short code taken, regenerating");
                continue;
            }

            let new_mapping = NewUrlMapping {
                id: code.clone(),
                origin_url: origin_url.to_string(),
                owner_id,
            };

            match self.repository.create(new_mapping).await {
                Ok(mapping) => {
                    info!(code = %mapping.id, owner_id, attempt, "url mapping created");
                    return Ok(mapping);
                }
                Err(StoreError::Conflict(_)) => {
                    debug!(code = %code, attempt, "short code claimed concurrently, regenerating");
                }
                Err(e) => return Err(e.into()),
            }
        }

        warn!(
            owner_id,
            attempts = self.max_attempts,
            "failed to allocate a free short code"
        );

        Err(ServiceError::CapacityExhausted {
            attempts: self.max_attempts,
        })
    }
}
