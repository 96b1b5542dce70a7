//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern.
//! Concrete stores live in the infrastructure layer and are injected into
//! services as `Arc<dyn Trait>`, so the same services run against
//! PostgreSQL in production and an in-memory store in tests.
//!
//! # Available Repositories
//!
//! - [`MappingRepository`] - URL mappings and their action records
//! - [`UserRepository`] - User accounts
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod mapping_repository;
pub mod user_repository;

pub use mapping_repository::MappingRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
