//! Repository port for the activity catalog and roster changes.

use crate::activity::domain::{
    Activity, ActivityCatalog, ActivityName, CapacityPolicy, ParticipantEmail, RosterEntry,
    RosterError,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for activity registry operations.
pub type ActivityRegistryResult<T> = Result<T, ActivityRegistryError>;

/// A roster mutation applied atomically to one activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterChange {
    /// Add a participant to the roster.
    SignUp {
        /// Participant to add.
        participant: ParticipantEmail,
        /// Whether a full roster rejects the signup.
        policy: CapacityPolicy,
        /// Time recorded on the new roster entry.
        joined_at: DateTime<Utc>,
    },
    /// Remove a participant from the roster.
    Unregister {
        /// Participant to remove.
        participant: ParticipantEmail,
    },
}

/// The outcome of a successfully applied [`RosterChange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterUpdate {
    /// Activity whose roster changed.
    pub activity: ActivityName,
    /// Entry that was added or removed.
    pub entry: RosterEntry,
    /// Remaining capacity after the change.
    pub spots_left: u32,
}

/// Activity registry contract.
///
/// Implementations must apply each [`RosterChange`] as a single critical
/// section: the membership check and the mutation may not interleave with
/// another change to the same activity.
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Returns a consistent snapshot of every activity in catalog order.
    async fn list(&self) -> ActivityRegistryResult<ActivityCatalog>;

    /// Finds an activity by exact name.
    ///
    /// Returns `None` when no activity has the given name.
    async fn find_by_name(&self, name: &str) -> ActivityRegistryResult<Option<Activity>>;

    /// Applies a roster change to the named activity.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityRegistryError::NotFound`] when the activity does not
    /// exist, or [`ActivityRegistryError::Roster`] when the domain rejects the
    /// change.
    async fn apply(&self, name: &str, change: RosterChange) -> ActivityRegistryResult<RosterUpdate>;
}

/// Errors returned by activity registry implementations.
#[derive(Debug, Clone, Error)]
pub enum ActivityRegistryError {
    /// No activity has the requested name.
    #[error("activity not found: {0}")]
    NotFound(String),

    /// The roster transition was rejected.
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ActivityRegistryError {
    /// Wraps a storage-layer error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
