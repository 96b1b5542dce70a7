//! Errors returned by application services.

use crate::domain::StoreError;
use thiserror::Error;

/// Failure of a service operation.
///
/// Not-found on a mapping and not-found on its action record are separate
/// kinds so callers can report them differently; both still map to a
/// 404-equivalent in the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("url mapping not found: {0}")]
    MappingNotFound(String),

    #[error("action record not found for url mapping: {0}")]
    ActionRecordNotFound(String),

    /// The allocator gave up after its retry budget without a free code.
    #[error("no free short code found after {attempts} attempts")]
    CapacityExhausted { attempts: usize },

    #[error("username already taken: {0}")]
    UsernameTaken(String),

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("invalid session token")]
    InvalidToken,

    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_is_transparent() {
        let err = ServiceError::from(StoreError::Timeout("find_by_id".into()));
        assert_eq!(err.to_string(), "store operation timed out: find_by_id");
    }
}
