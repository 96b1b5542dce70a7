//! DTOs for URL mapping endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::MappingDetails;
use crate::domain::entities::UrlMapping;

/// Request to shorten a URL.
///
/// The target is stored as given after trimming surrounding whitespace; it is
/// not checked to be a well-formed URL.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMappingRequest {
    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub origin_url: String,
}

impl CreateMappingRequest {
    /// Trims surrounding whitespace from the target.
    pub fn normalized(self) -> Self {
        Self {
            origin_url: self.origin_url.trim().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MappingResponse {
    pub id: String,
    pub short_url: String,
    pub origin_url: String,
    pub created_on: DateTime<Utc>,
}

impl MappingResponse {
    pub fn from_mapping(mapping: UrlMapping, base_url: &str) -> Self {
        Self {
            short_url: mapping.short_url(base_url),
            id: mapping.id,
            origin_url: mapping.origin_url,
            created_on: mapping.created_on,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MappingListResponse {
    pub total: usize,
    pub items: Vec<MappingResponse>,
}

/// Mapping with its click statistics.
#[derive(Debug, Serialize)]
pub struct MappingDetailsResponse {
    pub id: String,
    pub short_url: String,
    pub origin_url: String,
    pub owner_id: i64,
    pub click_count: i64,
    pub last_access: DateTime<Utc>,
    pub created_on: DateTime<Utc>,
}

impl MappingDetailsResponse {
    pub fn from_details(details: MappingDetails, base_url: &str) -> Self {
        let MappingDetails {
            mapping,
            action_record,
        } = details;

        Self {
            short_url: mapping.short_url(base_url),
            id: mapping.id,
            origin_url: mapping.origin_url,
            owner_id: mapping.owner_id,
            click_count: action_record.click_count,
            last_access: action_record.last_access,
            created_on: mapping.created_on,
        }
    }
}
