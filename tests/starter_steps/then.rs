//! Then steps for starter step BDD scenarios.

use super::world::StarterWorld;
use rstest_bdd_macros::then;
use stepwise::step::domain::ScenarioFailure;

#[then("every step passes")]
fn every_step_passes(world: &StarterWorld) -> Result<(), eyre::Report> {
    let report = world.report()?;
    if !report.is_passed() {
        return Err(eyre::eyre!("expected every step to pass, got {report:?}"));
    }
    Ok(())
}

#[then(r#"step {index:usize} is "{status}""#)]
fn step_has_status(world: &StarterWorld, index: usize, status: String) -> Result<(), eyre::Report> {
    let step = world.step_report(index)?;
    if step.status.as_str() != status {
        return Err(eyre::eyre!(
            "expected step {index} to be {status}, got {}",
            step.status
        ));
    }
    Ok(())
}

#[then(r#"step {index:usize} ran the handler "{handler}""#)]
fn step_ran_handler(
    world: &StarterWorld,
    index: usize,
    handler: String,
) -> Result<(), eyre::Report> {
    let step = world.step_report(index)?;
    if step.handler.as_deref() != Some(handler.as_str()) {
        return Err(eyre::eyre!(
            "expected step {index} to run {handler}, got {:?}",
            step.handler
        ));
    }
    Ok(())
}

#[then("the scenario fails with an assertion failure")]
fn scenario_fails_with_assertion(world: &StarterWorld) -> Result<(), eyre::Report> {
    let result = world.report()?.clone().into_result();
    if !matches!(result, Err(ScenarioFailure::StepFailed { .. })) {
        return Err(eyre::eyre!("expected an assertion failure, got {result:?}"));
    }
    Ok(())
}
