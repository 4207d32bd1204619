//! In-memory step registry adapter.

use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::step::domain::{StepDefinition, StepKind, StepPattern};
use crate::step::ports::{StepMatch, StepRegistry, StepRegistryError, StepRegistryResult};

/// Ordered, in-memory table of step patterns.
///
/// The table is filled by explicit [`InMemoryStepRegistry::register`] calls
/// and is immutable once handed to a dispatcher.
pub struct InMemoryStepRegistry<C> {
    definitions: Vec<Arc<StepDefinition<C>>>,
    entries: Vec<RegisteredPattern<C>>,
}

struct RegisteredPattern<C> {
    kind: StepKind,
    pattern: StepPattern,
    definition: Arc<StepDefinition<C>>,
}

impl<C> InMemoryStepRegistry<C> {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            definitions: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Creates a registry from supplied definitions, in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`StepRegistryError`] raised by
    /// [`InMemoryStepRegistry::register`].
    pub fn with_definitions(
        definitions: impl IntoIterator<Item = StepDefinition<C>>,
    ) -> StepRegistryResult<Self> {
        let mut registry = Self::new();
        for definition in definitions {
            registry.register(definition)?;
        }
        Ok(registry)
    }

    /// Registers a definition under every one of its patterns.
    ///
    /// Either all patterns are registered or none are.
    ///
    /// # Errors
    ///
    /// Returns [`StepRegistryError::MissingPatterns`] for a definition with no
    /// patterns, [`StepRegistryError::InvalidPattern`] when a pattern does not
    /// compile, and [`StepRegistryError::AmbiguousPattern`] when an already
    /// registered pattern of the same kind matches the line a new pattern
    /// stands for.
    pub fn register(&mut self, definition: StepDefinition<C>) -> StepRegistryResult<()> {
        if definition.patterns().is_empty() {
            return Err(StepRegistryError::MissingPatterns(
                definition.name().to_owned(),
            ));
        }

        let kind = definition.kind();
        let mut compiled: Vec<StepPattern> = Vec::with_capacity(definition.patterns().len());
        for raw in definition.patterns() {
            let pattern = StepPattern::parse(raw.as_str()).map_err(|source| {
                StepRegistryError::InvalidPattern {
                    definition: definition.name().to_owned(),
                    source,
                }
            })?;
            if let Some(existing) = self.shadowing_pattern(kind, &compiled, &pattern) {
                return Err(StepRegistryError::AmbiguousPattern {
                    kind,
                    pattern: pattern.as_str().to_owned(),
                    existing: existing.to_owned(),
                });
            }
            compiled.push(pattern);
        }

        debug!(
            kind = %kind,
            handler = definition.name(),
            patterns = compiled.len(),
            "registered step definition"
        );

        let shared = Arc::new(definition);
        self.entries
            .extend(compiled.into_iter().map(|pattern| RegisteredPattern {
                kind,
                pattern,
                definition: Arc::clone(&shared),
            }));
        self.definitions.push(shared);
        Ok(())
    }

    /// Returns the number of registered patterns across all definitions.
    #[must_use]
    pub fn pattern_count(&self) -> usize {
        self.entries.len()
    }

    fn shadowing_pattern<'a>(
        &'a self,
        kind: StepKind,
        pending: &'a [StepPattern],
        candidate: &StepPattern,
    ) -> Option<&'a str> {
        let line = candidate.sample_line();
        self.entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .map(|entry| &entry.pattern)
            .chain(pending)
            .find(|existing| existing.is_match(&line))
            .map(StepPattern::as_str)
    }
}

impl<C> Default for InMemoryStepRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for InMemoryStepRegistry<C> {
    fn clone(&self) -> Self {
        Self {
            definitions: self.definitions.clone(),
            entries: self
                .entries
                .iter()
                .map(|entry| RegisteredPattern {
                    kind: entry.kind,
                    pattern: entry.pattern.clone(),
                    definition: Arc::clone(&entry.definition),
                })
                .collect(),
        }
    }
}

impl<C> fmt::Debug for InMemoryStepRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryStepRegistry")
            .field("definitions", &self.definitions)
            .finish_non_exhaustive()
    }
}

impl<C> StepRegistry<C> for InMemoryStepRegistry<C> {
    fn resolve(&self, kind: StepKind, text: &str) -> Option<StepMatch<C>> {
        self.entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .find_map(|entry| {
                let arguments = entry.pattern.captures(text)?;
                Some(StepMatch {
                    definition: Arc::clone(&entry.definition),
                    pattern: entry.pattern.as_str().to_owned(),
                    arguments,
                })
            })
    }

    fn definitions(&self) -> Vec<Arc<StepDefinition<C>>> {
        self.definitions.clone()
    }
}
