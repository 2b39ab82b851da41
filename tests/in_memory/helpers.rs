//! Shared fixtures for in-memory activity registry tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mergington::activity::{
    adapters::{memory::InMemoryActivityRegistry, seed::mergington_definitions},
    domain::{ActivityCatalog, ActivityDefinition, ActivityName, Capacity, ParticipantEmail},
};
use mockable::Clock;

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Instant used by seeded rosters.
#[must_use]
pub fn seed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 1, 8, 0, 0)
        .single()
        .expect("valid seed instant")
}

/// Instant used for roster changes made during a test.
#[must_use]
pub fn change_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 2, 15, 30, 0)
        .single()
        .expect("valid change instant")
}

/// Builds a registry holding the built-in Mergington activities.
#[must_use]
pub fn seeded_registry() -> InMemoryActivityRegistry {
    let definitions = mergington_definitions().expect("built-in catalog is valid");
    let catalog = ActivityCatalog::from_definitions(definitions, &FixedClock(seed_instant()))
        .expect("built-in catalog has unique names");
    InMemoryActivityRegistry::new(catalog)
}

/// Builds a registry holding one empty activity with the given capacity.
#[must_use]
pub fn single_activity_registry(name: &str, capacity: u32) -> InMemoryActivityRegistry {
    let definition = ActivityDefinition {
        name: ActivityName::new(name).expect("valid activity name"),
        description: format!("{name} for testing"),
        schedule: "Daily, 3:30 PM - 4:30 PM".to_owned(),
        capacity: Capacity::new(capacity).expect("non-zero capacity"),
        participants: Vec::new(),
    };
    let catalog = ActivityCatalog::from_definitions([definition], &FixedClock(seed_instant()))
        .expect("single activity catalog");
    InMemoryActivityRegistry::new(catalog)
}

/// Parses a participant email known to be valid.
#[must_use]
pub fn email(value: &str) -> ParticipantEmail {
    ParticipantEmail::new(value).expect("valid participant email")
}
