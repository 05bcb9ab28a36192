//! HTTP server initialization and runtime setup.
//!
//! Handles storage setup, dependency wiring, and the Axum server lifecycle.

use crate::application::services::{DatabaseTokenAuthority, ShortcutService, TokenAuthority};
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::{ShortcutRepository, ShortcutTokenRepository};
use crate::infrastructure::persistence::{MemoryStore, PgShortcutRepository, PgTokenRepository};
use crate::routes::app_router;
use crate::state::{AppState, DynShortcutService};
use crate::utils::generator::{Generator, RandomGenerator};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens a PostgreSQL pool sized by the `DB_*` settings and applies
/// pending migrations.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn connect_database(config: &Config, database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to apply migrations")?;
    tracing::info!("Migrations applied");

    Ok(pool)
}

/// Wires the shortcut service from its storage ports.
///
/// One [`RandomGenerator`] feeds both shortcut names and edit keys. The
/// token scheme is [`DatabaseTokenAuthority`].
pub fn wire_service(
    shortcuts: Arc<dyn ShortcutRepository>,
    tokens: Arc<dyn ShortcutTokenRepository>,
) -> Arc<DynShortcutService> {
    let generator: Arc<dyn Generator> = Arc::new(RandomGenerator::new());
    let token_authority: Arc<dyn TokenAuthority> =
        Arc::new(DatabaseTokenAuthority::new(tokens, generator.clone()));

    Arc::new(ShortcutService::new(shortcuts, token_authority, generator))
}

/// Builds the shortcut service for the configured storage backend.
///
/// # Errors
///
/// Returns an error if the postgres backend is selected and the database
/// cannot be reached or migrated.
pub async fn build_service(config: &Config) -> Result<Arc<DynShortcutService>> {
    match (config.storage_backend, config.database_url.as_deref()) {
        (StorageBackend::Postgres, Some(database_url)) => {
            let pool = Arc::new(connect_database(config, database_url).await?);
            Ok(wire_service(
                Arc::new(PgShortcutRepository::new(pool.clone())),
                Arc::new(PgTokenRepository::new(pool)),
            ))
        }
        (StorageBackend::Postgres, None) => {
            anyhow::bail!("DATABASE_URL is required for the postgres storage backend")
        }
        (StorageBackend::Memory, _) => {
            tracing::warn!("Using in-memory storage; shortcuts are lost on restart");
            let store = MemoryStore::new();
            Ok(wire_service(
                Arc::new(store.shortcuts()),
                Arc::new(store.tokens()),
            ))
        }
    }
}

/// Builds the state shared by all HTTP handlers.
///
/// # Errors
///
/// See [`build_service`].
pub async fn build_state(config: &Config) -> Result<AppState> {
    let service = build_service(config).await?;
    Ok(AppState::new(service, config.behind_proxy))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage backend (PostgreSQL pool and migrations, or memory)
/// - Shortcut service and token authority
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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
