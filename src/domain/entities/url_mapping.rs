//! URL mapping entity: a short code pointing at an origin URL.

use chrono::{DateTime, Utc};

/// A persisted association between a short code and a target URL.
///
/// The `id` is the public short code. It is unique across all mappings and
/// never changes once assigned; mappings are not updated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: String,
    pub origin_url: String,
    pub owner_id: i64,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

impl UrlMapping {
    /// Builds the public short URL for this mapping.
    pub fn short_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.id)
    }
}

/// Input data for creating a mapping together with its action record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub id: String,
    pub origin_url: String,
    pub owner_id: i64,
}
