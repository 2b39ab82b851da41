//! In-memory activity registry, the process-lifetime source of truth.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::activity::{
    domain::{Activity, ActivityCatalog},
    ports::{
        ActivityRegistryError, ActivityRegistryResult, ActivityRepository, RosterChange,
        RosterUpdate,
    },
};

/// Thread-safe in-memory activity registry.
///
/// A single lock guards the whole catalog. Roster changes take the write
/// guard for the check and the mutation together; reads clone a snapshot
/// under the read guard.
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityRegistry {
    state: Arc<RwLock<ActivityCatalog>>,
}

impl InMemoryActivityRegistry {
    /// Creates a registry holding `catalog`.
    #[must_use]
    pub fn new(catalog: ActivityCatalog) -> Self {
        Self {
            state: Arc::new(RwLock::new(catalog)),
        }
    }
}

fn poisoned(err: impl std::fmt::Display) -> ActivityRegistryError {
    ActivityRegistryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRegistry {
    async fn list(&self) -> ActivityRegistryResult<ActivityCatalog> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.clone())
    }

    async fn find_by_name(&self, name: &str) -> ActivityRegistryResult<Option<Activity>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.get(name).cloned())
    }

    async fn apply(
        &self,
        name: &str,
        change: RosterChange,
    ) -> ActivityRegistryResult<RosterUpdate> {
        let mut state = self.state.write().map_err(poisoned)?;
        let activity = state
            .get_mut(name)
            .ok_or_else(|| ActivityRegistryError::NotFound(name.to_owned()))?;

        let entry = match change {
            RosterChange::SignUp {
                participant,
                policy,
                joined_at,
            } => activity.sign_up(participant, policy, joined_at)?,
            RosterChange::Unregister { participant } => activity.unregister(&participant)?,
        };

        Ok(RosterUpdate {
            activity: activity.name().clone(),
            entry,
            spots_left: activity.spots_left(),
        })
    }
}
