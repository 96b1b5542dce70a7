//! Domain layer containing business entities and store contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`error`] - Store failure taxonomy
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business logic lives in services
//! (see [`crate::application::services`]).

pub mod entities;
pub mod error;
pub mod repositories;

pub use error::StoreError;
