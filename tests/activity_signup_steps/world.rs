//! Shared world state for activity signup BDD scenarios.

use std::sync::Arc;

use mergington::activity::{
    adapters::{memory::InMemoryActivityRegistry, seed::mergington_definitions},
    domain::ActivityCatalog,
    services::{ActivityRegistryService, ActivityRegistryServiceError, RosterConfirmation},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestRegistryService = ActivityRegistryService<InMemoryActivityRegistry, DefaultClock>;

/// Scenario world for activity signup behaviour tests.
pub struct SignupWorld {
    /// The registry service under test.
    pub service: TestRegistryService,
    /// Result of the last signup or unregister attempt.
    pub last_result: Option<Result<RosterConfirmation, ActivityRegistryServiceError>>,
}

impl SignupWorld {
    /// Creates a world over an empty catalog.
    ///
    /// The `Given` step loads the Mergington activities.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: build_service(ActivityCatalog::default()),
            last_result: None,
        }
    }

    /// Replaces the service with one over the built-in activities.
    pub fn load_mergington_catalog(&mut self) -> Result<(), eyre::Report> {
        let definitions = mergington_definitions()?;
        let catalog = ActivityCatalog::from_definitions(definitions, &DefaultClock)?;
        let policy = self.service.capacity_policy();
        self.service = build_service(catalog).with_capacity_policy(policy);
        Ok(())
    }
}

impl Default for SignupWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn build_service(catalog: ActivityCatalog) -> TestRegistryService {
    ActivityRegistryService::new(
        Arc::new(InMemoryActivityRegistry::new(catalog)),
        Arc::new(DefaultClock),
    )
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SignupWorld {
    SignupWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
