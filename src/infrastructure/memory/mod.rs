//! In-memory repository implementations.
//!
//! Used with `STORE_BACKEND=memory` and by the integration tests. State
//! lives only as long as the process.

pub mod mapping_repository;
pub mod user_repository;

pub use mapping_repository::InMemoryMappingRepository;
pub use user_repository::InMemoryUserRepository;
