//! Adapter implementations and catalog sources for the activity registry.

pub mod catalog_file;
pub mod memory;
pub mod seed;
