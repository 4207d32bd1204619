//! Placeholder values captured from a matched step line.

use serde::{Deserialize, Serialize};

use super::AssertionFailure;

/// Captured placeholder values in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepArguments {
    values: Vec<(String, String)>,
}

impl StepArguments {
    /// Creates arguments from `(name, value)` pairs in pattern order.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Looks up a value by placeholder name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Looks up a value that the handler's pattern is known to declare.
    ///
    /// # Errors
    ///
    /// Returns [`AssertionFailure`] when no placeholder named `name` was
    /// captured.
    pub fn value(&self, name: &str) -> Result<&str, AssertionFailure> {
        self.get(name)
            .ok_or_else(|| AssertionFailure::new(format!("missing step argument '{name}'")))
    }

    /// Returns values in the order their placeholders appear.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(_, value)| value.as_str())
    }

    /// Returns `(name, value)` pairs in pattern order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the number of captured values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<N, V> FromIterator<(N, V)> for StepArguments
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into())),
        )
    }
}
