//! Error types for activity domain validation and roster transitions.

use super::{ActivityName, ParticipantEmail};
use thiserror::Error;

/// Errors returned while constructing activity domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActivityDomainError {
    /// The activity name is empty after trimming.
    #[error("activity name must not be empty")]
    EmptyActivityName,

    /// The activity name exceeds the 100-character limit.
    #[error("activity name exceeds 100 character limit: {0}")]
    ActivityNameTooLong(String),

    /// The participant identifier is empty or whitespace only.
    #[error("participant email must not be empty")]
    EmptyParticipant,

    /// The activity capacity is zero.
    #[error("max_participants must be a positive integer")]
    ZeroCapacity,

    /// Two catalog entries share the same activity name.
    #[error("duplicate activity name in catalog: {0}")]
    DuplicateActivityName(ActivityName),

    /// A seeded roster lists the same participant twice.
    #[error("participant {participant} is listed twice for {activity}")]
    DuplicateSeedParticipant {
        /// Activity whose seed roster is invalid.
        activity: ActivityName,
        /// Participant that appears more than once.
        participant: ParticipantEmail,
    },

    /// A seeded roster is larger than the activity capacity.
    #[error("{activity} seeds {seeded} participants but allows only {capacity}")]
    SeedExceedsCapacity {
        /// Activity whose seed roster is invalid.
        activity: ActivityName,
        /// Number of seeded participants.
        seeded: usize,
        /// Declared capacity.
        capacity: u32,
    },
}

/// Errors returned when a roster transition is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterError {
    /// The participant is already on the roster.
    #[error("{participant} is already signed up for {activity}")]
    AlreadyRegistered {
        /// Activity the signup targeted.
        activity: ActivityName,
        /// Participant that is already rostered.
        participant: ParticipantEmail,
    },

    /// The participant is not on the roster.
    #[error("{participant} is not signed up for {activity}")]
    NotSignedUp {
        /// Activity the unregister targeted.
        activity: ActivityName,
        /// Participant missing from the roster.
        participant: ParticipantEmail,
    },

    /// The roster already holds `max_participants` entries.
    #[error("{activity} is full ({capacity} participants)")]
    ActivityFull {
        /// Activity the signup targeted.
        activity: ActivityName,
        /// Capacity that has been reached.
        capacity: u32,
    },
}

/// Error returned while parsing a capacity policy from configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown capacity policy: {0}")]
pub struct ParseCapacityPolicyError(pub String);
