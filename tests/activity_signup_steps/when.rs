//! When steps for activity signup BDD scenarios.

use super::world::{SignupWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#""{email}" signs up for "{activity}""#)]
fn student_signs_up(world: &mut SignupWorld, email: String, activity: String) {
    world.last_result = Some(run_async(world.service.signup(&activity, &email)));
}

#[when(r#""{email}" unregisters from "{activity}""#)]
fn student_unregisters(world: &mut SignupWorld, email: String, activity: String) {
    world.last_result = Some(run_async(world.service.unregister(&activity, &email)));
}
