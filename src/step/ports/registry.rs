//! Step registry port.
//!
//! The registry port resolves scenario lines to step definitions for the
//! dispatcher.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::step::domain::{StepArguments, StepDefinition, StepKind, StepPatternError};

/// Result type for step registry operations.
pub type StepRegistryResult<T> = Result<T, StepRegistryError>;

/// A resolved step: the definition, the surface form that matched, and the
/// captured placeholder values.
pub struct StepMatch<C> {
    /// The definition whose handler should run.
    pub definition: Arc<StepDefinition<C>>,
    /// The registered pattern text that matched.
    pub pattern: String,
    /// Values captured by the pattern's placeholders.
    pub arguments: StepArguments,
}

impl<C> fmt::Debug for StepMatch<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepMatch")
            .field("definition", &self.definition.name())
            .field("pattern", &self.pattern)
            .field("arguments", &self.arguments)
            .finish()
    }
}

/// Port for resolving step text to handlers.
pub trait StepRegistry<C>: Send + Sync {
    /// Finds the first definition of `kind` whose pattern matches `text`.
    ///
    /// Patterns are tried in registration order.
    fn resolve(&self, kind: StepKind, text: &str) -> Option<StepMatch<C>>;

    /// Lists definitions in registration order.
    fn definitions(&self) -> Vec<Arc<StepDefinition<C>>>;
}

/// Errors for step registration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StepRegistryError {
    /// A pattern failed to compile.
    #[error("invalid step pattern for '{definition}': {source}")]
    InvalidPattern {
        /// Handler name of the rejected definition.
        definition: String,
        /// Compilation failure.
        source: StepPatternError,
    },

    /// A new pattern would be shadowed by, or duplicates, an existing one.
    #[error("{kind} pattern '{pattern}' is ambiguous with existing pattern '{existing}'")]
    AmbiguousPattern {
        /// Kind both patterns are registered under.
        kind: StepKind,
        /// The rejected pattern.
        pattern: String,
        /// The already registered pattern that matches it.
        existing: String,
    },

    /// A definition was registered without any pattern.
    #[error("step definition '{0}' declares no patterns")]
    MissingPatterns(String),
}
