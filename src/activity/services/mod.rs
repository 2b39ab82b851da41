//! Application services for the activity registry.

mod registry;

pub use registry::{
    ActivityRegistryService, ActivityRegistryServiceError, ActivityRegistryServiceResult,
    RegistryErrorKind, RosterAction, RosterConfirmation,
};
