//! When steps for starter step BDD scenarios.

use super::world::StarterWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use stepwise::step::domain::Scenario;

#[when("the scenario is dispatched")]
fn scenario_is_dispatched(world: &mut StarterWorld) -> Result<(), eyre::Report> {
    let scenario = Scenario::from_lines("behaviour", world.lines.iter().map(String::as_str))
        .wrap_err("parse queued scenario lines")?;
    let dispatcher = world
        .dispatcher
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no dispatcher in scenario world"))?;
    world.report = Some(dispatcher.run(&scenario));
    Ok(())
}
