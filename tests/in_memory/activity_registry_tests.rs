//! Roster changes applied through the activity repository port.

use super::helpers::{
    change_instant, email, seed_instant, seeded_registry, single_activity_registry,
};
use mergington::activity::{
    adapters::memory::InMemoryActivityRegistry,
    domain::{CapacityPolicy, RosterError},
    ports::{ActivityRegistryError, ActivityRepository, RosterChange},
};
use rstest::{fixture, rstest};

#[fixture]
fn registry() -> InMemoryActivityRegistry {
    seeded_registry()
}

fn sign_up(participant: &str) -> RosterChange {
    RosterChange::SignUp {
        participant: email(participant),
        policy: CapacityPolicy::Enforce,
        joined_at: change_instant(),
    }
}

fn unregister(participant: &str) -> RosterChange {
    RosterChange::Unregister {
        participant: email(participant),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_preserves_catalog_order(registry: InMemoryActivityRegistry) {
    let catalog = registry.list().await.expect("listing should succeed");

    let names: Vec<&str> = catalog.iter().map(|a| a.name().as_str()).collect();
    assert_eq!(
        names,
        [
            "Chess Club",
            "Programming Class",
            "Gym Class",
            "Soccer Team",
            "Basketball Club",
            "Drama Club",
            "Art Workshop",
            "Math Olympiad",
            "Science Club",
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeded_entries_carry_catalog_load_time(registry: InMemoryActivityRegistry) {
    let chess = registry
        .find_by_name("Chess Club")
        .await
        .expect("lookup should succeed")
        .expect("chess club exists");

    assert_eq!(chess.roster().len(), 2);
    assert!(
        chess
            .roster()
            .entries()
            .iter()
            .all(|entry| entry.joined_at() == seed_instant())
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sign_up_appends_entry_with_change_time(registry: InMemoryActivityRegistry) {
    let update = registry
        .apply("Soccer Team", sign_up("newstudent@mergington.edu"))
        .await
        .expect("signup should succeed");

    assert_eq!(update.activity.as_str(), "Soccer Team");
    assert_eq!(update.entry.participant().as_str(), "newstudent@mergington.edu");
    assert_eq!(update.entry.joined_at(), change_instant());
    assert_eq!(update.spots_left, 17);

    let soccer = registry
        .find_by_name("Soccer Team")
        .await
        .expect("lookup should succeed")
        .expect("soccer team exists");
    let participants: Vec<&str> = soccer.roster().participants().map(|p| p.as_str()).collect();
    assert_eq!(participants, ["newstudent@mergington.edu"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unregister_preserves_remaining_order(registry: InMemoryActivityRegistry) {
    registry
        .apply("Chess Club", sign_up("new@mergington.edu"))
        .await
        .expect("signup should succeed");
    let update = registry
        .apply("Chess Club", unregister("michael@mergington.edu"))
        .await
        .expect("unregister should succeed");

    assert_eq!(update.entry.joined_at(), seed_instant());
    assert_eq!(update.spots_left, 10);

    let chess = registry
        .find_by_name("Chess Club")
        .await
        .expect("lookup should succeed")
        .expect("chess club exists");
    let participants: Vec<&str> = chess.roster().participants().map(|p| p.as_str()).collect();
    assert_eq!(participants, ["daniel@mergington.edu", "new@mergington.edu"]);
}

#[rstest]
#[case::sign_up(sign_up("x@y.edu"))]
#[case::unregister(unregister("x@y.edu"))]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_activity_is_not_found(
    registry: InMemoryActivityRegistry,
    #[case] change: RosterChange,
) {
    let err = registry
        .apply("Underwater Basket Weaving", change)
        .await
        .expect_err("unknown activity must be rejected");

    assert!(matches!(
        err,
        ActivityRegistryError::NotFound(name) if name == "Underwater Basket Weaving"
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn activity_names_are_matched_exactly(registry: InMemoryActivityRegistry) {
    let found = registry
        .find_by_name("chess club")
        .await
        .expect("lookup should succeed");
    assert!(found.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_changes_leave_roster_untouched(registry: InMemoryActivityRegistry) {
    let duplicate = registry
        .apply("Chess Club", sign_up("michael@mergington.edu"))
        .await
        .expect_err("duplicate must be rejected");
    assert!(matches!(
        duplicate,
        ActivityRegistryError::Roster(RosterError::AlreadyRegistered { .. })
    ));

    let absent = registry
        .apply("Chess Club", unregister("nobody@mergington.edu"))
        .await
        .expect_err("absent participant must be rejected");
    assert!(matches!(
        absent,
        ActivityRegistryError::Roster(RosterError::NotSignedUp { .. })
    ));

    let chess = registry
        .find_by_name("Chess Club")
        .await
        .expect("lookup should succeed")
        .expect("chess club exists");
    let participants: Vec<&str> = chess.roster().participants().map(|p| p.as_str()).collect();
    assert_eq!(participants, ["michael@mergington.edu", "daniel@mergington.edu"]);
}

#[rstest]
#[case(CapacityPolicy::Enforce, false)]
#[case(CapacityPolicy::Ignore, true)]
#[tokio::test(flavor = "multi_thread")]
async fn full_roster_follows_capacity_policy(
    #[case] policy: CapacityPolicy,
    #[case] accepted: bool,
) {
    let registry = single_activity_registry("Chamber Choir", 1);
    registry
        .apply("Chamber Choir", sign_up("first@mergington.edu"))
        .await
        .expect("first signup fits");

    let result = registry
        .apply(
            "Chamber Choir",
            RosterChange::SignUp {
                participant: email("second@mergington.edu"),
                policy,
                joined_at: change_instant(),
            },
        )
        .await;

    assert_eq!(result.is_ok(), accepted, "unexpected outcome {result:?}");
    if let Ok(update) = result {
        assert_eq!(update.spots_left, 0);
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clones_share_the_same_catalog(registry: InMemoryActivityRegistry) {
    let other = registry.clone();
    other
        .apply("Drama Club", sign_up("actor@mergington.edu"))
        .await
        .expect("signup should succeed");

    let drama = registry
        .find_by_name("Drama Club")
        .await
        .expect("lookup should succeed")
        .expect("drama club exists");
    assert_eq!(drama.roster().len(), 1);
}
