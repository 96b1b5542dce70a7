//! Core domain entities.
//!
//! - [`UrlMapping`] - A short code and the URL it redirects to
//! - [`ActionRecord`] - Click counter and last access time of one mapping
//! - [`User`] - Owner of mappings
//!
//! Creation inputs live in separate structs (`NewUrlMapping`, `NewUser`).

pub mod action_record;
pub mod url_mapping;
pub mod user;

pub use action_record::ActionRecord;
pub use url_mapping::{NewUrlMapping, UrlMapping};
pub use user::{NewUser, User};
