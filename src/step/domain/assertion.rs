//! Assertion failures raised by step handlers.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result returned by every step handler.
pub type StepResult = Result<(), AssertionFailure>;

/// The single failure kind a step handler can raise.
///
/// A failure ends the current scenario but never the process; the dispatcher
/// records it against the step that raised it.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[error("assertion failed: {message}")]
pub struct AssertionFailure {
    message: String,
}

impl AssertionFailure {
    /// Creates a failure with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Fails with `message` unless `condition` holds.
///
/// # Errors
///
/// Returns [`AssertionFailure`] when `condition` is false.
pub fn ensure(condition: bool, message: impl FnOnce() -> String) -> StepResult {
    if condition {
        Ok(())
    } else {
        Err(AssertionFailure::new(message()))
    }
}

/// Fails unless `actual == expected`, reporting both values.
///
/// # Errors
///
/// Returns [`AssertionFailure`] when the values differ.
///
/// # Examples
///
/// ```
/// use stepwise::step::domain::ensure_eq;
///
/// assert!(ensure_eq(&"successful", &"successful").is_ok());
/// let failure = ensure_eq(&"failing", &"successful").expect_err("values differ");
/// assert!(failure.message().contains("failing"));
/// ```
pub fn ensure_eq<A, E>(actual: &A, expected: &E) -> StepResult
where
    A: PartialEq<E> + fmt::Debug + ?Sized,
    E: fmt::Debug + ?Sized,
{
    ensure(actual == expected, || {
        format!("expected {expected:?}, got {actual:?}")
    })
}
