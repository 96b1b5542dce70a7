//! Per-mapping click counter and access timestamp.

use chrono::{DateTime, Utc};

/// Redirect usage tracked for exactly one [`super::UrlMapping`].
///
/// Created with `click_count == 0` in the same store operation as its
/// mapping and mutated on every successful redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRecord {
    pub id: i64,
    pub url_mapping_id: String,
    pub click_count: i64,
    pub last_access: DateTime<Utc>,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

impl ActionRecord {
    /// Returns a fresh record for a mapping created at `created_on`.
    pub fn initial(id: i64, url_mapping_id: impl Into<String>, created_on: DateTime<Utc>) -> Self {
        Self {
            id,
            url_mapping_id: url_mapping_id.into(),
            click_count: 0,
            last_access: created_on,
            created_on,
            updated_on: created_on,
        }
    }

    /// Applies one visit at `at`.
    ///
    /// `last_access` never moves backwards, even when concurrent visits are
    /// applied out of timestamp order.
    pub fn visit(&mut self, at: DateTime<Utc>) {
        self.click_count += 1;
        self.last_access = self.last_access.max(at);
        self.updated_on = at;
    }
}
