//! Server assembly and startup.

use crate::{
    activity::{
        adapters::{
            catalog_file::{CatalogLoadError, load_catalog},
            memory::InMemoryActivityRegistry,
            seed::mergington_definitions,
        },
        domain::{ActivityCatalog, ActivityDomainError},
        services::ActivityRegistryService,
    },
    api::{AppState, router},
    config::{ConfigError, ServerConfig},
};
use axum::Router;
use mockable::DefaultClock;
use std::{io, sync::Arc};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Errors raised before or while serving requests.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Configuration values could not be interpreted.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The built-in catalog failed validation.
    #[error("built-in catalog is invalid: {0}")]
    Seed(#[from] ActivityDomainError),

    /// The catalog file could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogLoadError),

    /// Binding or serving failed.
    #[error("server I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Builds the initial catalog from `--catalog` or the built-in activities.
///
/// # Errors
///
/// Returns [`StartupError`] when the catalog file cannot be loaded or the
/// activity definitions are invalid.
pub fn initial_catalog(config: &ServerConfig) -> Result<ActivityCatalog, StartupError> {
    let clock = DefaultClock;
    if let Some(path) = &config.catalog {
        info!(catalog = %path, "loading activity catalog");
        let definitions = load_catalog(path)?;
        let catalog = ActivityCatalog::from_definitions(definitions, &clock)
            .map_err(CatalogLoadError::from)?;
        return Ok(catalog);
    }
    Ok(ActivityCatalog::from_definitions(
        mergington_definitions()?,
        &clock,
    )?)
}

/// Builds the application router for `config`.
///
/// # Errors
///
/// Returns [`StartupError`] when the initial catalog cannot be built.
pub fn build_app(config: &ServerConfig) -> Result<Router, StartupError> {
    let catalog = initial_catalog(config)?;
    info!(
        activities = catalog.len(),
        capacity_policy = %config.capacity_policy,
        "activity registry ready"
    );
    let repository = Arc::new(InMemoryActivityRegistry::new(catalog));
    let service = ActivityRegistryService::new(repository, Arc::new(DefaultClock))
        .with_capacity_policy(config.capacity_policy);
    Ok(router(AppState::new(service), config.static_dir.as_std_path()))
}

/// Binds the configured address and serves until Ctrl-C.
///
/// # Errors
///
/// Returns [`StartupError`] when the app cannot be built, the address cannot
/// be bound, or serving fails.
pub async fn run(config: ServerConfig) -> Result<(), StartupError> {
    let app = build_app(&config)?;
    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(address = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl-C, shutting down"),
        Err(err) => warn!(error = %err, "failed to listen for Ctrl-C"),
    }
}
