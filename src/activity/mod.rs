//! Extracurricular activity registry for Mergington.
//!
//! This module holds the catalog of activities and the signup and unregister
//! transitions on their rosters. It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations and catalog sources in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
