//! Given steps for starter step BDD scenarios.

use super::world::StarterWorld;
use rstest_bdd_macros::given;

#[given("the starter step registry")]
fn starter_step_registry(world: &mut StarterWorld) -> Result<(), eyre::Report> {
    world.install_starter_registry()
}

#[given(r#"the scenario line "{line}""#)]
fn scenario_line(world: &mut StarterWorld, line: String) {
    world.lines.push(line);
}
