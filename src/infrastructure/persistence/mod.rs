//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries with bound parameters.
//!
//! # Repositories
//!
//! - [`PgMappingRepository`] - URL mappings and action records
//! - [`PgUserRepository`] - User accounts

pub mod db_error;
pub mod pg_mapping_repository;
pub mod pg_user_repository;
pub mod pool;

pub use pg_mapping_repository::PgMappingRepository;
pub use pg_user_repository::PgUserRepository;
pub use pool::{connect_pool, run_migrations};
