//! Domain model for activities and their rosters.
//!
//! An activity is a named offering with a description, schedule, capacity,
//! and roster. Roster changes are the only mutation the domain allows once a
//! catalog is built. Infrastructure concerns stay outside this boundary.

mod activity;
mod capacity;
mod catalog;
mod error;
mod name;
mod participant;
mod roster;

pub use activity::{Activity, ActivityDefinition};
pub use capacity::{Capacity, CapacityPolicy};
pub use catalog::ActivityCatalog;
pub use error::{ActivityDomainError, ParseCapacityPolicyError, RosterError};
pub use name::ActivityName;
pub use participant::ParticipantEmail;
pub use roster::{Roster, RosterEntry};
