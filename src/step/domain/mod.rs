//! Domain types for step registration and dispatch.
//!
//! This module contains pure types with no engine or I/O dependencies:
//! kinds and keywords, compiled patterns, captured arguments, definitions,
//! scenario lines, and the outcomes recorded for them.

mod arguments;
mod assertion;
mod definition;
mod error;
mod keyword;
mod outcome;
mod pattern;
mod scenario;

pub use arguments::StepArguments;
pub use assertion::{AssertionFailure, StepResult, ensure, ensure_eq};
pub use definition::{StepDefinition, StepHandler};
pub use error::{ParseStepKeywordError, ScenarioLineError, StepPatternError};
pub use keyword::{StepKeyword, StepKind};
pub use outcome::{ScenarioFailure, ScenarioReport, ScenarioStatus, StepReport, StepStatus};
pub use pattern::{PatternSegment, StepPattern};
pub use scenario::{Scenario, ScenarioStep};
