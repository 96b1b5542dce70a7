//! Shared application state injected into handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{
    AuthService, CodeAllocator, MappingService, RedirectResolver,
};
use crate::config::Config;
use crate::domain::repositories::{MappingRepository, UserRepository};

/// Service handles shared by every request.
///
/// Repositories are trait objects so the same state runs against
/// PostgreSQL or the in-memory store.
#[derive(Clone)]
pub struct AppState {
    pub allocator: Arc<CodeAllocator<dyn MappingRepository>>,
    pub resolver: Arc<RedirectResolver<dyn MappingRepository>>,
    pub mapping_service: Arc<MappingService<dyn MappingRepository>>,
    pub auth_service: Arc<AuthService<dyn UserRepository>>,
    /// Prefix for `short_url` fields, without a trailing slash.
    pub base_url: String,
}

/// Tunables for [`AppState::new`].
#[derive(Debug, Clone)]
pub struct StateOptions {
    pub base_url: String,
    pub session_secret: String,
    pub allocation_max_attempts: usize,
    pub store_timeout: Duration,
}

impl From<&Config> for StateOptions {
    fn from(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            session_secret: config.session_secret.clone(),
            allocation_max_attempts: config.allocation_max_attempts,
            store_timeout: config.store_timeout(),
        }
    }
}

impl AppState {
    /// Wires services on top of the given stores.
    pub fn new(
        mappings: Arc<dyn MappingRepository>,
        users: Arc<dyn UserRepository>,
        options: StateOptions,
    ) -> Self {
        let allocator = CodeAllocator::new(mappings.clone())
            .with_max_attempts(options.allocation_max_attempts);
        let resolver =
            RedirectResolver::new(mappings.clone()).with_store_timeout(options.store_timeout);

        Self {
            allocator: Arc::new(allocator),
            resolver: Arc::new(resolver),
            mapping_service: Arc::new(MappingService::new(mappings)),
            auth_service: Arc::new(AuthService::new(users, options.session_secret)),
            base_url: options.base_url.trim_end_matches('/').to_string(),
        }
    }
}
