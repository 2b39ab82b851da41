//! Activity capacity and the policy deciding whether it is enforced.

use super::{ActivityDomainError, ParseCapacityPolicyError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Positive upper bound on the number of participants in an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Capacity(u32);

impl Capacity {
    /// Creates a capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityDomainError::ZeroCapacity`] when `value` is zero.
    pub const fn new(value: u32) -> Result<Self, ActivityDomainError> {
        if value == 0 {
            return Err(ActivityDomainError::ZeroCapacity);
        }
        Ok(Self(value))
    }

    /// Returns the capacity as an integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns whether a roster of `len` entries has reached this capacity.
    #[must_use]
    pub fn is_reached_by(self, len: usize) -> bool {
        usize::try_from(self.0).is_ok_and(|max| len >= max)
    }

    /// Returns whether a roster of `len` entries is larger than this capacity.
    #[must_use]
    pub fn is_exceeded_by(self, len: usize) -> bool {
        usize::try_from(self.0).is_ok_and(|max| len > max)
    }

    /// Returns how many more participants fit after `len` entries.
    #[must_use]
    pub fn remaining_after(self, len: usize) -> u32 {
        let taken = u32::try_from(len).unwrap_or(u32::MAX);
        self.0.saturating_sub(taken)
    }
}

impl TryFrom<u32> for Capacity {
    type Error = ActivityDomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Capacity> for u32 {
    fn from(capacity: Capacity) -> Self {
        capacity.0
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether signups are rejected once an activity is full.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityPolicy {
    /// Reject signups that would exceed `max_participants`.
    #[default]
    Enforce,
    /// Accept signups regardless of `max_participants`.
    Ignore,
}

impl CapacityPolicy {
    /// Returns the canonical configuration representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enforce => "enforce",
            Self::Ignore => "ignore",
        }
    }

    /// Returns whether capacity limits apply.
    #[must_use]
    pub const fn is_enforced(self) -> bool {
        matches!(self, Self::Enforce)
    }
}

impl fmt::Display for CapacityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for CapacityPolicy {
    type Error = ParseCapacityPolicyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "enforce" => Ok(Self::Enforce),
            "ignore" => Ok(Self::Ignore),
            _ => Err(ParseCapacityPolicyError(value.to_owned())),
        }
    }
}
