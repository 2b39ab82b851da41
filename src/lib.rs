//! Mergington: extracurricular activities registry for Mergington High School.
//!
//! Students browse the activity catalog and sign themselves up or off by
//! email. Rosters live in memory for the life of the process.
//!
//! # Architecture
//!
//! The registry follows hexagonal architecture principles:
//!
//! - **Domain**: Activities, rosters and capacity rules with no I/O
//! - **Ports**: The [`activity::ports::ActivityRepository`] trait
//! - **Adapters**: The in-memory registry, built-in seed and JSON catalog file
//!
//! # Modules
//!
//! - [`activity`]: Activity catalog, roster changes and the registry service
//! - [`api`]: HTTP routes, handlers and JSON views
//! - [`config`]: Command-line and environment configuration
//! - [`server`]: Startup wiring and graceful shutdown
//! - [`telemetry`]: Tracing subscriber setup

pub mod activity;
pub mod api;
pub mod config;
pub mod server;
pub mod telemetry;
