//! Errors reported by mapping and user stores.

use thiserror::Error;

/// Failure of a store operation.
///
/// Repository implementations translate their backend errors into this type
/// so services can react to the kind of failure (for example retrying on a
/// [`StoreError::Conflict`]) without knowing which backend is in use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("record already exists: {0}")]
    Conflict(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store operation timed out: {0}")]
    Timeout(String),
    #[error("store query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}
