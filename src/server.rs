//! HTTP server initialization and runtime setup.
//!
//! Builds the configured store, wires services and runs the Axum server
//! until a shutdown signal arrives.

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::{MappingRepository, UserRepository};
use crate::infrastructure::memory::{InMemoryMappingRepository, InMemoryUserRepository};
use crate::infrastructure::persistence::{
    PgMappingRepository, PgUserRepository, connect_pool, run_migrations,
};
use crate::routes::app_router;
use crate::state::{AppState, StateOptions};

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Store handles for the selected backend.
pub struct Stores {
    pub mappings: Arc<dyn MappingRepository>,
    pub users: Arc<dyn UserRepository>,
}

/// Opens the configured store.
///
/// For PostgreSQL this connects the pool and applies pending migrations.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn build_stores(config: &Config) -> Result<Stores> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let pool = connect_pool(config).await?;
            tracing::info!("Connected to database");

            run_migrations(&pool).await?;
            tracing::info!("Migrations applied");

            let pool = Arc::new(pool);
            Ok(Stores {
                mappings: Arc::new(PgMappingRepository::new(pool.clone())),
                users: Arc::new(PgUserRepository::new(pool)),
            })
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on restart");
            Ok(Stores {
                mappings: Arc::new(InMemoryMappingRepository::new()),
                users: Arc::new(InMemoryUserRepository::new()),
            })
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Store initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let stores = build_stores(&config).await?;

    let state = AppState::new(stores.mappings, stores.users, StateOptions::from(&config));

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
