//! Shared handler state.

use crate::activity::{
    adapters::memory::InMemoryActivityRegistry, services::ActivityRegistryService,
};
use mockable::DefaultClock;
use std::sync::Arc;

/// Registry service wired into the HTTP layer.
pub type RegistryService = ActivityRegistryService<InMemoryActivityRegistry, DefaultClock>;

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<RegistryService>,
}

impl AppState {
    /// Wraps a registry service for use by the router.
    #[must_use]
    pub fn new(registry: RegistryService) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Returns the registry service.
    #[must_use]
    pub fn registry(&self) -> &RegistryService {
        &self.registry
    }
}
