//! JSON response bodies.

use crate::activity::{
    domain::{Activity, ActivityCatalog},
    services::RosterConfirmation,
};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer, ser::SerializeMap};

/// Catalog listing keyed by activity name, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView(Vec<(String, ActivitySummaryView)>);

impl From<&ActivityCatalog> for CatalogView {
    fn from(catalog: &ActivityCatalog) -> Self {
        Self(
            catalog
                .iter()
                .map(|a| (a.name().to_string(), ActivitySummaryView::from(a)))
                .collect(),
        )
    }
}

impl Serialize for CatalogView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, activity) in &self.0 {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

/// One activity as listed by `GET /activities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivitySummaryView {
    /// Free-text description.
    pub description: String,
    /// Meeting time.
    pub schedule: String,
    /// Capacity.
    pub max_participants: u32,
    /// Participant emails in signup order.
    pub participants: Vec<String>,
}

impl From<&Activity> for ActivitySummaryView {
    fn from(activity: &Activity) -> Self {
        Self {
            description: activity.description().to_owned(),
            schedule: activity.schedule().to_owned(),
            max_participants: activity.capacity().get(),
            participants: activity
                .roster()
                .participants()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// A roster entry in the activity detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantView {
    /// Participant email.
    pub email: String,
    /// When the participant joined.
    pub joined_at: DateTime<Utc>,
}

/// One activity as returned by `GET /activities/{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityDetailView {
    /// Activity name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Meeting time.
    pub schedule: String,
    /// Capacity.
    pub max_participants: u32,
    /// Remaining capacity.
    pub spots_left: u32,
    /// Roster entries in signup order.
    pub participants: Vec<ParticipantView>,
}

impl From<&Activity> for ActivityDetailView {
    fn from(activity: &Activity) -> Self {
        Self {
            name: activity.name().to_string(),
            description: activity.description().to_owned(),
            schedule: activity.schedule().to_owned(),
            max_participants: activity.capacity().get(),
            spots_left: activity.spots_left(),
            participants: activity
                .roster()
                .entries()
                .iter()
                .map(|entry| ParticipantView {
                    email: entry.participant().to_string(),
                    joined_at: entry.joined_at(),
                })
                .collect(),
        }
    }
}

/// Confirmation body for roster changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageView {
    /// Human-readable confirmation.
    pub message: String,
}

impl From<&RosterConfirmation> for MessageView {
    fn from(confirmation: &RosterConfirmation) -> Self {
        Self {
            message: confirmation.message(),
        }
    }
}
