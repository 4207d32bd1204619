//! Scenario dispatch service.
//!
//! Provides [`StepDispatcher`], which resolves scenario lines against a
//! registry, invokes the matched handlers with the scenario context, and
//! records one outcome per line.

use std::any::Any;
use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, info, info_span, warn};

use super::DispatchConfig;
use crate::step::domain::{
    AssertionFailure, Scenario, ScenarioReport, ScenarioStep, StepReport, StepResult, StepStatus,
};
use crate::step::ports::{StepMatch, StepRegistry};

/// Service that runs scenarios against a step registry.
pub struct StepDispatcher<R, C>
where
    R: StepRegistry<C>,
{
    registry: Arc<R>,
    config: DispatchConfig,
    context: PhantomData<fn(&mut C)>,
}

impl<R, C> StepDispatcher<R, C>
where
    R: StepRegistry<C>,
{
    /// Creates a dispatcher over an explicitly built registry.
    #[must_use]
    pub const fn new(registry: Arc<R>, config: DispatchConfig) -> Self {
        Self {
            registry,
            config,
            context: PhantomData,
        }
    }

    /// Returns the registry this dispatcher resolves against.
    #[must_use]
    pub const fn registry(&self) -> &Arc<R> {
        &self.registry
    }

    /// Returns the dispatch configuration.
    #[must_use]
    pub const fn config(&self) -> DispatchConfig {
        self.config
    }

    /// Resolves and runs a single step.
    ///
    /// A handler panic is reported as an [`AssertionFailure`] carrying the
    /// panic message.
    pub fn dispatch_step(&self, context: &mut C, step: &ScenarioStep) -> StepReport {
        let Some(found) = self.registry.resolve(step.kind(), step.text()) else {
            warn!(kind = %step.kind(), step = step.text(), "undefined step");
            return StepReport::new(step.clone(), None, StepStatus::Undefined);
        };
        let handler = Some(found.definition.name().to_owned());

        if self.config.dry_run {
            return StepReport::new(step.clone(), handler, StepStatus::Untested);
        }

        debug!(
            kind = %step.kind(),
            step = step.text(),
            pattern = found.pattern.as_str(),
            handler = found.definition.name(),
            "dispatching step"
        );
        let status = match invoke_handler(&found, context) {
            Ok(()) => StepStatus::Passed,
            Err(failure) => {
                debug!(step = step.text(), %failure, "step failed");
                StepStatus::Failed { failure }
            }
        };
        StepReport::new(step.clone(), handler, status)
    }

    /// Runs a scenario against a caller-owned context.
    ///
    /// Once a step fails or is undefined, the remaining steps are reported as
    /// skipped (or undefined, if nothing matches them) unless the
    /// configuration says to continue.
    pub fn run_with_context(&self, scenario: &Scenario, context: &mut C) -> ScenarioReport {
        let span = info_span!("scenario", name = scenario.name());
        let _entered = span.enter();

        let mut halted = false;
        let mut reports = Vec::with_capacity(scenario.steps().len());
        for step in scenario.steps() {
            let report = if halted {
                self.skip_step(step)
            } else {
                self.dispatch_step(context, step)
            };
            halted |= report.halts_scenario() && self.config.halts_on_failure();
            reports.push(report);
        }

        let report = ScenarioReport::new(scenario.name(), reports);
        info!(status = ?report.status(), "scenario finished");
        report
    }

    /// Runs a scenario with a fresh context created for it and dropped after.
    #[must_use]
    pub fn run(&self, scenario: &Scenario) -> ScenarioReport
    where
        C: Default,
    {
        let mut context = C::default();
        self.run_with_context(scenario, &mut context)
    }

    fn skip_step(&self, step: &ScenarioStep) -> StepReport {
        self.registry.resolve(step.kind(), step.text()).map_or_else(
            || StepReport::new(step.clone(), None, StepStatus::Undefined),
            |found| {
                StepReport::new(
                    step.clone(),
                    Some(found.definition.name().to_owned()),
                    StepStatus::Skipped,
                )
            },
        )
    }
}

impl<R, C> Clone for StepDispatcher<R, C>
where
    R: StepRegistry<C>,
{
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            config: self.config,
            context: PhantomData,
        }
    }
}

fn invoke_handler<C>(found: &StepMatch<C>, context: &mut C) -> StepResult {
    panic::catch_unwind(AssertUnwindSafe(|| {
        found.definition.invoke(context, &found.arguments)
    }))
    .unwrap_or_else(|payload| Err(AssertionFailure::new(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "step handler panicked".to_owned())
}
