//! Activity aggregate root.

use super::{
    ActivityDomainError, ActivityName, Capacity, CapacityPolicy, ParticipantEmail, Roster,
    RosterEntry, RosterError,
};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Parameter object describing an activity before it enters the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDefinition {
    /// Unique catalog name.
    pub name: ActivityName,
    /// Free-text description.
    pub description: String,
    /// Human-readable meeting time.
    pub schedule: String,
    /// Maximum number of participants.
    pub capacity: Capacity,
    /// Participants already signed up when the catalog is loaded.
    pub participants: Vec<ParticipantEmail>,
}

/// An extracurricular activity and its roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    name: ActivityName,
    description: String,
    schedule: String,
    capacity: Capacity,
    roster: Roster,
}

impl Activity {
    /// Builds an activity from its definition, rostering the seeded
    /// participants at the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityDomainError::DuplicateSeedParticipant`] when a
    /// participant is listed twice, or
    /// [`ActivityDomainError::SeedExceedsCapacity`] when more participants are
    /// seeded than the capacity allows.
    pub fn from_definition(
        definition: ActivityDefinition,
        clock: &impl Clock,
    ) -> Result<Self, ActivityDomainError> {
        let ActivityDefinition {
            name,
            description,
            schedule,
            capacity,
            participants,
        } = definition;

        let seeded = participants.len();
        if capacity.is_exceeded_by(seeded) {
            return Err(ActivityDomainError::SeedExceedsCapacity {
                activity: name,
                seeded,
                capacity: capacity.get(),
            });
        }

        let joined_at = clock.utc();
        let mut roster = Roster::default();
        for participant in participants {
            if roster.insert(participant.clone(), joined_at).is_none() {
                return Err(ActivityDomainError::DuplicateSeedParticipant {
                    activity: name,
                    participant,
                });
            }
        }

        Ok(Self {
            name,
            description,
            schedule,
            capacity,
            roster,
        })
    }

    /// Returns the activity name.
    #[must_use]
    pub const fn name(&self) -> &ActivityName {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the meeting schedule.
    #[must_use]
    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    /// Returns the participant capacity.
    #[must_use]
    pub const fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Returns the roster.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns how many more participants fit before the capacity is reached.
    #[must_use]
    pub fn spots_left(&self) -> u32 {
        self.capacity.remaining_after(self.roster.len())
    }

    /// Returns whether the roster has reached capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.capacity.is_reached_by(self.roster.len())
    }

    /// Adds `participant` to the roster, recording `joined_at`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::AlreadyRegistered`] when the participant is on
    /// the roster, or [`RosterError::ActivityFull`] when `policy` enforces
    /// capacity and the roster is full.
    pub fn sign_up(
        &mut self,
        participant: ParticipantEmail,
        policy: CapacityPolicy,
        joined_at: DateTime<Utc>,
    ) -> Result<RosterEntry, RosterError> {
        if policy.is_enforced() && self.is_full() && !self.roster.contains(&participant) {
            return Err(RosterError::ActivityFull {
                activity: self.name.clone(),
                capacity: self.capacity.get(),
            });
        }

        self.roster
            .insert(participant.clone(), joined_at)
            .ok_or_else(|| RosterError::AlreadyRegistered {
                activity: self.name.clone(),
                participant,
            })
    }

    /// Removes `participant` from the roster and returns their entry.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotSignedUp`] when the participant is not on the
    /// roster.
    pub fn unregister(
        &mut self,
        participant: &ParticipantEmail,
    ) -> Result<RosterEntry, RosterError> {
        self.roster
            .remove(participant)
            .ok_or_else(|| RosterError::NotSignedUp {
                activity: self.name.clone(),
                participant: participant.clone(),
            })
    }
}
