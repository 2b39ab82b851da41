//! Port contracts for the activity registry.
//!
//! Ports define infrastructure-agnostic interfaces used by registry services.

pub mod repository;

pub use repository::{
    ActivityRegistryError, ActivityRegistryResult, ActivityRepository, RosterChange, RosterUpdate,
};
