//! Ordered collection of activities with unique names.

use super::{Activity, ActivityDefinition, ActivityDomainError};
use mockable::Clock;
use std::collections::HashSet;

/// The set of activities offered by the school, in catalog order.
///
/// Construction rejects duplicate names, so lookups by name are unambiguous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

impl ActivityCatalog {
    /// Creates a catalog from already-built activities.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityDomainError::DuplicateActivityName`] when two
    /// activities share a name.
    pub fn new(activities: Vec<Activity>) -> Result<Self, ActivityDomainError> {
        let mut seen = HashSet::with_capacity(activities.len());
        for activity in &activities {
            if !seen.insert(activity.name()) {
                return Err(ActivityDomainError::DuplicateActivityName(
                    activity.name().clone(),
                ));
            }
        }
        Ok(Self { activities })
    }

    /// Builds a catalog from definitions, rostering seeded participants at
    /// the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityDomainError`] when a definition is invalid or two
    /// definitions share a name.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ActivityDefinition>,
        clock: &impl Clock,
    ) -> Result<Self, ActivityDomainError> {
        let activities = definitions
            .into_iter()
            .map(|definition| Activity::from_definition(definition, clock))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(activities)
    }

    /// Finds an activity by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name().as_str() == name)
    }

    /// Finds an activity by exact name for mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities.iter_mut().find(|a| a.name().as_str() == name)
    }

    /// Iterates over activities in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    /// Returns the number of activities.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.activities.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl<'a> IntoIterator for &'a ActivityCatalog {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.activities.iter()
    }
}
