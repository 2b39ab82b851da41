//! Then steps for activity signup BDD scenarios.

use super::world::{SignupWorld, run_async};
use mergington::activity::services::{RegistryErrorKind, RosterConfirmation};
use rstest_bdd_macros::then;

fn confirmation(world: &SignupWorld) -> Result<&RosterConfirmation, eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(confirmation)) => Ok(confirmation),
        Some(Err(err)) => Err(eyre::eyre!("expected confirmation, got error: {err}")),
        None => Err(eyre::eyre!("missing roster change result in scenario world")),
    }
}

fn expect_failure(world: &SignupWorld, expected: RegistryErrorKind) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(err)) if err.kind() == expected => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected {expected:?}, got {err}")),
        Some(Ok(confirmation)) => Err(eyre::eyre!(
            "expected {expected:?}, change succeeded: {confirmation}"
        )),
        None => Err(eyre::eyre!("missing roster change result in scenario world")),
    }
}

#[then(r#"the change is confirmed with "{message}""#)]
fn change_confirmed(world: &SignupWorld, message: String) -> Result<(), eyre::Report> {
    let actual = confirmation(world)?.message();
    if actual != message {
        return Err(eyre::eyre!("expected message '{message}', got '{actual}'"));
    }
    Ok(())
}

#[then("the change fails because the student is already signed up")]
fn fails_already_signed_up(world: &SignupWorld) -> Result<(), eyre::Report> {
    expect_failure(world, RegistryErrorKind::AlreadyRegistered)
}

#[then("the change fails because the student is not signed up")]
fn fails_not_signed_up(world: &SignupWorld) -> Result<(), eyre::Report> {
    expect_failure(world, RegistryErrorKind::NotSignedUp)
}

#[then("the change fails because the activity does not exist")]
fn fails_not_found(world: &SignupWorld) -> Result<(), eyre::Report> {
    expect_failure(world, RegistryErrorKind::NotFound)
}

#[then("the change fails because the activity is full")]
fn fails_full(world: &SignupWorld) -> Result<(), eyre::Report> {
    expect_failure(world, RegistryErrorKind::ActivityFull)
}

#[then(r#""{name}" has {count:usize} participants"#)]
fn participant_count(world: &SignupWorld, name: String, count: usize) -> Result<(), eyre::Report> {
    let activity = run_async(world.service.find_activity(&name))
        .map_err(|err| eyre::eyre!("find_activity failed: {err}"))?
        .ok_or_else(|| eyre::eyre!("activity '{name}' missing from catalog"))?;
    let actual = activity.roster().len();
    if actual != count {
        return Err(eyre::eyre!("expected {count} participants in '{name}', found {actual}"));
    }
    Ok(())
}
