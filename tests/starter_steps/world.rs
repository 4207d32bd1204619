//! Shared world state for starter step BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use stepwise::starter::starter_registry;
use stepwise::step::{
    adapters::memory::InMemoryStepRegistry,
    domain::{ScenarioReport, StepReport},
    services::{DispatchConfig, StepDispatcher},
};

/// Dispatcher type used by the BDD world; the starter steps need no context.
pub type StarterDispatcher = StepDispatcher<InMemoryStepRegistry<()>, ()>;

/// Scenario world for starter step behaviour tests.
#[derive(Default)]
pub struct StarterWorld {
    /// Dispatcher over the starter registry.
    pub dispatcher: Option<StarterDispatcher>,
    /// Raw `Keyword text` lines queued for dispatch.
    pub lines: Vec<String>,
    /// Report of the last dispatched scenario.
    pub report: Option<ScenarioReport>,
}

impl StarterWorld {
    /// Builds the dispatcher over a fresh starter registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the starter steps fail to register.
    pub fn install_starter_registry(&mut self) -> Result<(), eyre::Report> {
        let registry = starter_registry()?;
        self.dispatcher = Some(StepDispatcher::new(
            Arc::new(registry),
            DispatchConfig::default(),
        ));
        Ok(())
    }

    /// Returns the last scenario report.
    ///
    /// # Errors
    ///
    /// Returns an error if no scenario has been dispatched yet.
    pub fn report(&self) -> Result<&ScenarioReport, eyre::Report> {
        self.report
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no scenario has been dispatched"))
    }

    /// Returns the report of the 1-based step `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if the step does not exist.
    pub fn step_report(&self, index: usize) -> Result<&StepReport, eyre::Report> {
        self.report()?
            .steps()
            .get(index.saturating_sub(1))
            .ok_or_else(|| eyre::eyre!("scenario has no step {index}"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> StarterWorld {
    StarterWorld::default()
}
