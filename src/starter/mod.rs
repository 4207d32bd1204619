//! Starter step set.
//!
//! Three semantic steps, each reachable through a plain and a decorated
//! surface form. The decorations (parentheses, brackets, quotes, asterisks)
//! are pure aliases and carry no meaning. Every handler accepts any context
//! type and leaves it untouched.

use crate::step::adapters::memory::InMemoryStepRegistry;
use crate::step::domain::{StepArguments, StepDefinition, StepKind, StepResult, ensure_eq};
use crate::step::ports::StepRegistryResult;

/// Surface forms of the precondition step.
pub const BEHAVE_INSTALLED_PATTERNS: [&str; 2] =
    ["we have behave installed", "we have (behave) installed"];

/// Surface forms of the action step; both capture `kind`.
pub const IMPLEMENT_TEST_PATTERNS: [&str; 2] = [
    "we implement a {kind} test",
    r#""we" implement a [{kind}] test"#,
];

/// Surface forms of the outcome step.
pub const SEE_RESULT_PATTERNS: [&str; 2] = ["we will see the result", "we will *see* the result"];

/// The only `kind` value the action step accepts.
pub const SUCCESSFUL: &str = "successful";

/// Precondition: always succeeds.
///
/// # Errors
///
/// Never fails.
pub const fn behave_installed<C>(_context: &mut C, _arguments: &StepArguments) -> StepResult {
    Ok(())
}

/// Action: the captured `kind` must be exactly `successful`.
///
/// # Errors
///
/// Returns [`crate::step::domain::AssertionFailure`] for any other value,
/// including a missing capture.
pub fn implement_test<C>(_context: &mut C, arguments: &StepArguments) -> StepResult {
    let kind = arguments.value("kind")?;
    ensure_eq(kind, SUCCESSFUL)
}

/// Outcome: a tautological check standing in for a real assertion.
///
/// # Errors
///
/// Never fails.
pub fn see_result<C>(_context: &mut C, _arguments: &StepArguments) -> StepResult {
    ensure_eq(&1, &1)
}

/// Returns the three starter definitions with all their aliases.
#[must_use]
pub fn starter_definitions<C: 'static>() -> Vec<StepDefinition<C>> {
    vec![
        with_patterns(
            StepDefinition::new(StepKind::Given, "behave_installed", behave_installed::<C>),
            BEHAVE_INSTALLED_PATTERNS,
        ),
        with_patterns(
            StepDefinition::new(StepKind::When, "implement_test", implement_test::<C>),
            IMPLEMENT_TEST_PATTERNS,
        ),
        with_patterns(
            StepDefinition::new(StepKind::Then, "see_result", see_result::<C>),
            SEE_RESULT_PATTERNS,
        ),
    ]
}

/// Registers the starter steps into an existing registry.
///
/// # Errors
///
/// Returns [`crate::step::ports::StepRegistryError`] when a starter pattern
/// clashes with one already registered.
pub fn register_starter_steps<C: 'static>(
    registry: &mut InMemoryStepRegistry<C>,
) -> StepRegistryResult<()> {
    starter_definitions()
        .into_iter()
        .try_for_each(|definition| registry.register(definition))
}

/// Creates a registry holding only the starter steps.
///
/// # Errors
///
/// Returns [`crate::step::ports::StepRegistryError`] if the starter patterns
/// fail to register.
pub fn starter_registry<C: 'static>() -> StepRegistryResult<InMemoryStepRegistry<C>> {
    InMemoryStepRegistry::with_definitions(starter_definitions())
}

fn with_patterns<C>(definition: StepDefinition<C>, patterns: [&str; 2]) -> StepDefinition<C> {
    patterns
        .into_iter()
        .fold(definition, |built, pattern| built.with_pattern(pattern))
}
