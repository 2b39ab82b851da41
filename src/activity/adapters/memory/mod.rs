//! In-memory adapters for the activity registry.

mod activity_registry;

pub use activity_registry::InMemoryActivityRegistry;
