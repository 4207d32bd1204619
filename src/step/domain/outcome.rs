//! Step and scenario outcomes recorded by the dispatcher.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::{AssertionFailure, ScenarioStep};

/// Outcome of a single step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepStatus {
    /// The handler ran and its assertions held.
    Passed,
    /// The handler raised an assertion failure.
    Failed {
        /// The failure raised by the handler.
        failure: AssertionFailure,
    },
    /// The step was not run because an earlier step did not pass.
    Skipped,
    /// No registered pattern matches the step.
    Undefined,
    /// A handler matched but was not run (dry run).
    Untested,
}

impl StepStatus {
    /// Returns the snake-case status label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed { .. } => "failed",
            Self::Skipped => "skipped",
            Self::Undefined => "undefined",
            Self::Untested => "untested",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one scenario line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    /// The line that was dispatched.
    pub step: ScenarioStep,
    /// Name of the handler the line resolved to, if any.
    pub handler: Option<String>,
    /// What happened.
    pub status: StepStatus,
}

impl StepReport {
    /// Creates a step report.
    #[must_use]
    pub const fn new(step: ScenarioStep, handler: Option<String>, status: StepStatus) -> Self {
        Self {
            step,
            handler,
            status,
        }
    }

    /// Returns whether the step passed.
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self.status, StepStatus::Passed)
    }

    /// Returns the assertion failure if the step failed.
    #[must_use]
    pub const fn failure(&self) -> Option<&AssertionFailure> {
        match &self.status {
            StepStatus::Failed { failure } => Some(failure),
            _ => None,
        }
    }

    /// Returns whether later steps must be skipped after this one.
    #[must_use]
    pub const fn halts_scenario(&self) -> bool {
        matches!(
            self.status,
            StepStatus::Failed { .. } | StepStatus::Undefined
        )
    }
}

/// Aggregate outcome of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioStatus {
    /// Every step passed.
    Passed,
    /// At least one step failed.
    Failed,
    /// No step failed but at least one is undefined.
    Undefined,
    /// Dry run: every step resolved but none ran.
    Untested,
}

/// Outcome of a whole scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioReport {
    name: String,
    steps: Vec<StepReport>,
}

impl ScenarioReport {
    /// Creates a report from per-step outcomes.
    #[must_use]
    pub fn new(name: impl Into<String>, steps: Vec<StepReport>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }

    /// Returns the scenario name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns per-step outcomes in scenario order.
    #[must_use]
    pub fn steps(&self) -> &[StepReport] {
        &self.steps
    }

    /// Returns the aggregate status.
    #[must_use]
    pub fn status(&self) -> ScenarioStatus {
        let has = |wanted: fn(&StepStatus) -> bool| {
            self.steps.iter().any(|report| wanted(&report.status))
        };
        if has(|status| matches!(status, StepStatus::Failed { .. })) {
            ScenarioStatus::Failed
        } else if has(|status| matches!(status, StepStatus::Undefined)) {
            ScenarioStatus::Undefined
        } else if has(|status| matches!(status, StepStatus::Untested)) {
            ScenarioStatus::Untested
        } else {
            ScenarioStatus::Passed
        }
    }

    /// Returns whether every step passed.
    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.status() == ScenarioStatus::Passed
    }

    /// Returns the first step that failed or was undefined.
    #[must_use]
    pub fn first_halting_step(&self) -> Option<&StepReport> {
        self.steps.iter().find(|report| report.halts_scenario())
    }

    /// Converts a failed or undefined scenario into an error.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioFailure`] naming the first step that failed or had
    /// no matching pattern.
    pub fn into_result(self) -> Result<Self, ScenarioFailure> {
        let Some(halting) = self.first_halting_step() else {
            return Ok(self);
        };
        let step = format!("{} {}", halting.step.keyword(), halting.step.text());
        let scenario = self.name.clone();
        Err(halting.failure().map_or_else(
            || ScenarioFailure::UndefinedStep {
                scenario: scenario.clone(),
                step: step.clone(),
            },
            |failure| ScenarioFailure::StepFailed {
                scenario: scenario.clone(),
                step: step.clone(),
                failure: failure.clone(),
            },
        ))
    }
}

/// Error form of a scenario that did not pass.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScenarioFailure {
    /// A step handler raised an assertion failure.
    #[error("scenario '{scenario}' failed at step '{step}': {failure}")]
    StepFailed {
        /// Scenario name.
        scenario: String,
        /// The failing line.
        step: String,
        /// The handler's failure.
        failure: AssertionFailure,
    },

    /// A step matched no registered pattern.
    #[error("scenario '{scenario}' has undefined step '{step}'")]
    UndefinedStep {
        /// Scenario name.
        scenario: String,
        /// The unmatched line.
        step: String,
    },
}
