//! Participant identifier type.

use super::ActivityDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Email-like identifier for a student on an activity roster.
///
/// Only presence is checked. The value is otherwise opaque and compared
/// exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParticipantEmail(String);

impl ParticipantEmail {
    /// Creates a participant identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityDomainError::EmptyParticipant`] when the value is
    /// empty or whitespace only.
    pub fn new(value: impl Into<String>) -> Result<Self, ActivityDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(ActivityDomainError::EmptyParticipant);
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ParticipantEmail {
    type Error = ActivityDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ParticipantEmail> for String {
    fn from(email: ParticipantEmail) -> Self {
        email.0
    }
}

impl AsRef<str> for ParticipantEmail {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ParticipantEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
