//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls
//! and business rules. Services consume repository traits and provide a clean
//! API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::allocator::CodeAllocator`] - Short code allocation with collision retry
//! - [`services::resolver::RedirectResolver`] - Redirect lookup with click tracking
//! - [`services::mapping_service::MappingService`] - Mapping listing and details
//! - [`services::auth_service::AuthService`] - Registration, login and session tokens

pub mod error;
pub mod services;

pub use error::ServiceError;
