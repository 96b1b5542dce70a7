//! Translation of `sqlx` errors into store errors.

use crate::domain::StoreError;

/// Returns true if `e` is a unique constraint violation.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

/// Maps a `sqlx` error onto the store error kinds services understand.
///
/// Unique violations become [`StoreError::Conflict`] carrying the violated
/// constraint name.
pub fn map_sqlx_error(e: sqlx::Error) -> StoreError {
    if is_unique_violation(&e) {
        let constraint = e
            .as_database_error()
            .and_then(|db_err| db_err.constraint())
            .unwrap_or("unique")
            .to_string();
        return StoreError::Conflict(constraint);
    }

    let message = e.to_string();

    match e {
        sqlx::Error::PoolTimedOut => StoreError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StoreError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StoreError::InvalidData(message),
        _ => StoreError::Query(message),
    }
}
