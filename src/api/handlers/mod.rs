//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod health;
pub mod mappings;
pub mod redirect;

pub use auth::{login_handler, register_handler};
pub use health::health_handler;
pub use mappings::{create_mapping_handler, list_mappings_handler, mapping_details_handler};
pub use redirect::redirect_handler;
