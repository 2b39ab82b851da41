//! Activity roster: an insertion-ordered set of participants.

use super::ParticipantEmail;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// A participant on a roster together with the time they joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    participant: ParticipantEmail,
    joined_at: DateTime<Utc>,
}

impl RosterEntry {
    /// Returns the rostered participant.
    #[must_use]
    pub const fn participant(&self) -> &ParticipantEmail {
        &self.participant
    }

    /// Returns when the participant joined the roster.
    #[must_use]
    pub const fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }
}

/// Set of participants signed up for one activity.
///
/// Membership is a hash set; `entries` keeps signup order for display and
/// always holds exactly the members of `members`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    members: HashSet<ParticipantEmail>,
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Returns whether `participant` is on the roster.
    #[must_use]
    pub fn contains(&self, participant: &ParticipantEmail) -> bool {
        self.members.contains(participant)
    }

    /// Returns the number of rostered participants.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nobody is signed up.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns roster entries in signup order.
    #[must_use]
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Iterates over participants in signup order.
    pub fn participants(&self) -> impl Iterator<Item = &ParticipantEmail> {
        self.entries.iter().map(RosterEntry::participant)
    }

    /// Adds `participant` and returns the new entry. Returns `None` and
    /// leaves the roster unchanged when they are already present.
    pub(super) fn insert(
        &mut self,
        participant: ParticipantEmail,
        joined_at: DateTime<Utc>,
    ) -> Option<RosterEntry> {
        if !self.members.insert(participant.clone()) {
            return None;
        }
        let entry = RosterEntry {
            participant,
            joined_at,
        };
        self.entries.push(entry.clone());
        Some(entry)
    }

    /// Removes `participant`, returning their entry when present.
    pub(super) fn remove(&mut self, participant: &ParticipantEmail) -> Option<RosterEntry> {
        if !self.members.remove(participant) {
            return None;
        }
        let position = self
            .entries
            .iter()
            .position(|e| e.participant == *participant)?;
        Some(self.entries.remove(position))
    }
}
