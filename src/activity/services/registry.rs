//! Service layer for the activity registry.
//!
//! Provides [`ActivityRegistryService`] which lists the catalog and applies
//! signup and unregister requests to activity rosters.

use crate::activity::{
    domain::{
        Activity, ActivityCatalog, ActivityDomainError, ActivityName, CapacityPolicy,
        ParticipantEmail, RosterError,
    },
    ports::{ActivityRegistryError, ActivityRepository, RosterChange, RosterUpdate},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// The roster transition a confirmation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RosterAction {
    /// The participant was added.
    SignedUp,
    /// The participant was removed.
    Unregistered,
}

/// Confirmation returned after a successful roster change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfirmation {
    action: RosterAction,
    activity: ActivityName,
    participant: ParticipantEmail,
    joined_at: DateTime<Utc>,
    spots_left: u32,
}

impl RosterConfirmation {
    fn new(action: RosterAction, update: RosterUpdate) -> Self {
        let RosterUpdate {
            activity,
            entry,
            spots_left,
        } = update;
        Self {
            action,
            activity,
            participant: entry.participant().clone(),
            joined_at: entry.joined_at(),
            spots_left,
        }
    }

    /// Returns the transition that took place.
    #[must_use]
    pub const fn action(&self) -> RosterAction {
        self.action
    }

    /// Returns the activity whose roster changed.
    #[must_use]
    pub const fn activity(&self) -> &ActivityName {
        &self.activity
    }

    /// Returns the participant that was added or removed.
    #[must_use]
    pub const fn participant(&self) -> &ParticipantEmail {
        &self.participant
    }

    /// Returns when the participant joined the roster.
    #[must_use]
    pub const fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }

    /// Returns the remaining capacity after the change.
    #[must_use]
    pub const fn spots_left(&self) -> u32 {
        self.spots_left
    }

    /// Returns a human-readable confirmation message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RosterConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            RosterAction::SignedUp => {
                write!(f, "Signed up {} for {}", self.participant, self.activity)
            }
            RosterAction::Unregistered => {
                write!(f, "Unregistered {} from {}", self.participant, self.activity)
            }
        }
    }
}

/// Coarse classification of registry failures for callers that translate
/// them into client-visible responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryErrorKind {
    /// The referenced activity does not exist.
    NotFound,
    /// The participant is already on the roster.
    AlreadyRegistered,
    /// The participant is not on the roster.
    NotSignedUp,
    /// The roster is at capacity.
    ActivityFull,
    /// The request carried an invalid value.
    InvalidInput,
    /// Storage failed.
    Internal,
}

/// Service-level errors for activity registry operations.
#[derive(Debug, Error)]
pub enum ActivityRegistryServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] ActivityDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ActivityRegistryError),
}

impl ActivityRegistryServiceError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> RegistryErrorKind {
        match self {
            Self::Domain(_) => RegistryErrorKind::InvalidInput,
            Self::Repository(ActivityRegistryError::NotFound(_)) => RegistryErrorKind::NotFound,
            Self::Repository(ActivityRegistryError::Roster(roster)) => match roster {
                RosterError::AlreadyRegistered { .. } => RegistryErrorKind::AlreadyRegistered,
                RosterError::NotSignedUp { .. } => RegistryErrorKind::NotSignedUp,
                RosterError::ActivityFull { .. } => RegistryErrorKind::ActivityFull,
            },
            Self::Repository(ActivityRegistryError::Persistence(_)) => RegistryErrorKind::Internal,
        }
    }
}

/// Result type for activity registry service operations.
pub type ActivityRegistryServiceResult<T> = Result<T, ActivityRegistryServiceError>;

/// Activity listing and roster orchestration service.
pub struct ActivityRegistryService<R, C>
where
    R: ActivityRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    policy: CapacityPolicy,
}

impl<R, C> Clone for ActivityRegistryService<R, C>
where
    R: ActivityRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            policy: self.policy,
        }
    }
}

impl<R, C> ActivityRegistryService<R, C>
where
    R: ActivityRepository,
    C: Clock + Send + Sync,
{
    /// Creates a service that enforces activity capacity.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            policy: CapacityPolicy::Enforce,
        }
    }

    /// Sets whether signups are rejected once an activity is full.
    #[must_use]
    pub const fn with_capacity_policy(mut self, policy: CapacityPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the capacity policy in effect.
    #[must_use]
    pub const fn capacity_policy(&self) -> CapacityPolicy {
        self.policy
    }

    /// Returns every activity with its current roster.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityRegistryServiceError::Repository`] when storage
    /// fails.
    pub async fn list_activities(&self) -> ActivityRegistryServiceResult<ActivityCatalog> {
        Ok(self.repository.list().await.inspect_err(log_failure)?)
    }

    /// Finds an activity by exact name.
    ///
    /// Returns `Ok(None)` when no activity has the given name.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityRegistryServiceError::Repository`] when storage
    /// fails.
    pub async fn find_activity(
        &self,
        name: &str,
    ) -> ActivityRegistryServiceResult<Option<Activity>> {
        Ok(self
            .repository
            .find_by_name(name)
            .await
            .inspect_err(log_failure)?)
    }

    /// Adds `participant` to the roster of the named activity.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityRegistryError::NotFound`] for an unknown activity,
    /// [`RosterError::AlreadyRegistered`] when the participant is on the
    /// roster, [`RosterError::ActivityFull`] when capacity is enforced and
    /// reached, or [`ActivityRegistryServiceError::Domain`] when the
    /// participant identifier is blank.
    pub async fn signup(
        &self,
        activity_name: &str,
        participant: &str,
    ) -> ActivityRegistryServiceResult<RosterConfirmation> {
        let participant = self.parse_participant(activity_name, participant).await?;
        let change = RosterChange::SignUp {
            participant,
            policy: self.policy,
            joined_at: self.clock.utc(),
        };
        let update = self.apply(activity_name, change).await?;
        let confirmation = RosterConfirmation::new(RosterAction::SignedUp, update);
        info!(
            activity = %confirmation.activity(),
            participant = %confirmation.participant(),
            spots_left = confirmation.spots_left(),
            "participant signed up"
        );
        Ok(confirmation)
    }

    /// Removes `participant` from the roster of the named activity.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityRegistryError::NotFound`] for an unknown activity,
    /// [`RosterError::NotSignedUp`] when the participant is not on the
    /// roster, or [`ActivityRegistryServiceError::Domain`] when the
    /// participant identifier is blank.
    pub async fn unregister(
        &self,
        activity_name: &str,
        participant: &str,
    ) -> ActivityRegistryServiceResult<RosterConfirmation> {
        let participant = self.parse_participant(activity_name, participant).await?;
        let update = self
            .apply(activity_name, RosterChange::Unregister { participant })
            .await?;
        let confirmation = RosterConfirmation::new(RosterAction::Unregistered, update);
        info!(
            activity = %confirmation.activity(),
            participant = %confirmation.participant(),
            spots_left = confirmation.spots_left(),
            "participant unregistered"
        );
        Ok(confirmation)
    }

    async fn apply(
        &self,
        activity_name: &str,
        change: RosterChange,
    ) -> ActivityRegistryServiceResult<RosterUpdate> {
        self.repository
            .apply(activity_name, change)
            .await
            .map_err(|err| {
                log_failure(&err);
                err.into()
            })
    }

    /// Validates a participant identifier. An unknown activity takes
    /// precedence over a malformed identifier.
    async fn parse_participant(
        &self,
        activity_name: &str,
        participant: &str,
    ) -> ActivityRegistryServiceResult<ParticipantEmail> {
        match ParticipantEmail::new(participant) {
            Ok(parsed) => Ok(parsed),
            Err(err) => {
                if self.find_activity(activity_name).await?.is_none() {
                    debug!(activity = activity_name, "rejected request for unknown activity");
                    return Err(ActivityRegistryError::NotFound(activity_name.to_owned()).into());
                }
                debug!(activity = activity_name, error = %err, "rejected participant");
                Err(err.into())
            }
        }
    }
}

fn log_failure(err: &ActivityRegistryError) {
    match err {
        ActivityRegistryError::Persistence(_) => error!(error = %err, "activity registry failure"),
        ActivityRegistryError::NotFound(_) | ActivityRegistryError::Roster(_) => {
            debug!(error = %err, "roster change rejected");
        }
    }
}
