//! Built-in Mergington High School activity catalog.

use crate::activity::domain::{
    ActivityDefinition, ActivityDomainError, ActivityName, Capacity, ParticipantEmail,
};

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

const MERGINGTON_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Soccer Team",
        description: "Join the school soccer team and compete in local leagues",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 18,
        participants: &[],
    },
    SeedActivity {
        name: "Basketball Club",
        description: "Practice basketball skills and play friendly matches",
        schedule: "Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &[],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Participate in school plays and improve acting skills",
        schedule: "Mondays, 4:00 PM - 5:30 PM",
        max_participants: 20,
        participants: &[],
    },
    SeedActivity {
        name: "Art Workshop",
        description: "Explore painting, drawing, and other visual arts",
        schedule: "Fridays, 2:00 PM - 3:30 PM",
        max_participants: 16,
        participants: &[],
    },
    SeedActivity {
        name: "Math Olympiad",
        description: "Prepare for math competitions and solve challenging problems",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 10,
        participants: &[],
    },
    SeedActivity {
        name: "Science Club",
        description: "Conduct experiments and explore scientific concepts",
        schedule: "Wednesdays, 4:00 PM - 5:00 PM",
        max_participants: 14,
        participants: &[],
    },
];

/// Returns the definitions of the built-in Mergington catalog.
///
/// # Errors
///
/// Returns [`ActivityDomainError`] only if the built-in table is malformed.
pub fn mergington_definitions() -> Result<Vec<ActivityDefinition>, ActivityDomainError> {
    MERGINGTON_ACTIVITIES
        .iter()
        .map(|seed| {
            Ok(ActivityDefinition {
                name: ActivityName::new(seed.name)?,
                description: seed.description.to_owned(),
                schedule: seed.schedule.to_owned(),
                capacity: Capacity::new(seed.max_participants)?,
                participants: seed
                    .participants
                    .iter()
                    .map(|email| ParticipantEmail::new(*email))
                    .collect::<Result<_, _>>()?,
            })
        })
        .collect()
}
