//! Business logic services for the application layer.

pub mod allocator;
pub mod auth_service;
pub mod mapping_service;
pub mod resolver;

pub use allocator::CodeAllocator;
pub use auth_service::AuthService;
pub use mapping_service::{MappingDetails, MappingService};
pub use resolver::RedirectResolver;
