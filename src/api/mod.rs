//! HTTP interface for the activity registry.
//!
//! Handlers translate requests into registry calls and registry outcomes into
//! status codes. The registry itself knows nothing about HTTP.

mod error;
mod handlers;
mod routes;
mod state;
pub mod views;

pub use error::ApiError;
pub use handlers::{LANDING_PAGE, ParticipantQuery};
pub use routes::router;
pub use state::{AppState, RegistryService};
