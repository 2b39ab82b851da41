//! Validated activity name type.

use super::ActivityDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for an activity name.
const MAX_NAME_LENGTH: usize = 100;

/// Human-readable activity name, unique within the catalog.
///
/// Names are display strings such as `Chess Club` and may contain spaces.
/// Surrounding whitespace is trimmed; case is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActivityName(String);

impl ActivityName {
    /// Creates a validated activity name.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityDomainError::EmptyActivityName`] when the value is
    /// empty after trimming, or [`ActivityDomainError::ActivityNameTooLong`]
    /// when it exceeds 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ActivityDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ActivityDomainError::EmptyActivityName);
        }

        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(ActivityDomainError::ActivityNameTooLong(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the activity name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ActivityName {
    type Error = ActivityDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ActivityName> for String {
    fn from(name: ActivityName) -> Self {
        name.0
    }
}

impl AsRef<str> for ActivityName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ActivityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
