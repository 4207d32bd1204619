//! Step definitions: one handler bound to one or more surface forms.

use std::fmt;
use std::sync::Arc;

use super::{StepArguments, StepKind, StepResult};

/// Shared callback invoked for a matched step.
pub type StepHandler<C> = Arc<dyn Fn(&mut C, &StepArguments) -> StepResult + Send + Sync>;

/// A semantic step and the patterns that route to it.
///
/// Patterns are kept as raw text here; registries compile and validate them
/// at registration time.
pub struct StepDefinition<C> {
    kind: StepKind,
    name: String,
    patterns: Vec<String>,
    handler: StepHandler<C>,
}

impl<C> StepDefinition<C> {
    /// Creates a definition without patterns.
    #[must_use]
    pub fn new<F>(kind: StepKind, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&mut C, &StepArguments) -> StepResult + Send + Sync + 'static,
    {
        Self {
            kind,
            name: name.into(),
            patterns: Vec::new(),
            handler: Arc::new(handler),
        }
    }

    /// Adds a surface form that routes to this definition's handler.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    /// Returns the registration keyword.
    #[must_use]
    pub const fn kind(&self) -> StepKind {
        self.kind
    }

    /// Returns the handler name used in reports and logs.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the raw patterns in registration order.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Invokes the handler.
    ///
    /// # Errors
    ///
    /// Returns the handler's [`super::AssertionFailure`] unchanged.
    pub fn invoke(&self, context: &mut C, arguments: &StepArguments) -> StepResult {
        (self.handler)(context, arguments)
    }
}

impl<C> Clone for StepDefinition<C> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            name: self.name.clone(),
            patterns: self.patterns.clone(),
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<C> fmt::Debug for StepDefinition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepDefinition")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("patterns", &self.patterns)
            .finish_non_exhaustive()
    }
}
