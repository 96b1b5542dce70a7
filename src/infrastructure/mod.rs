//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete store implementations.
//!
//! # Modules
//!
//! - [`memory`] - In-process stores on `DashMap`
//! - [`persistence`] - PostgreSQL repository implementations

pub mod memory;
pub mod persistence;
