//! Step kinds and scenario line keywords.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParseStepKeywordError;

/// Registration keyword of a step definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Precondition establishing scenario state.
    Given,
    /// Action performed by the scenario.
    When,
    /// Outcome checked by the scenario.
    Then,
}

impl StepKind {
    /// Returns the capitalised Gherkin keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword that opens a scenario line.
///
/// `And` and `But` are conjunctions: they carry the kind of the line before
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKeyword {
    /// `Given`.
    Given,
    /// `When`.
    When,
    /// `Then`.
    Then,
    /// `And`, continuing the previous kind.
    And,
    /// `But`, continuing the previous kind.
    But,
}

impl StepKeyword {
    /// Returns the kind this keyword names directly.
    ///
    /// Conjunctions return `None`; their kind comes from the preceding line.
    #[must_use]
    pub const fn kind(self) -> Option<StepKind> {
        match self {
            Self::Given => Some(StepKind::Given),
            Self::When => Some(StepKind::When),
            Self::Then => Some(StepKind::Then),
            Self::And | Self::But => None,
        }
    }

    /// Returns the capitalised Gherkin keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
        }
    }
}

impl From<StepKind> for StepKeyword {
    fn from(kind: StepKind) -> Self {
        match kind {
            StepKind::Given => Self::Given,
            StepKind::When => Self::When,
            StepKind::Then => Self::Then,
        }
    }
}

impl FromStr for StepKeyword {
    type Err = ParseStepKeywordError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "given" => Ok(Self::Given),
            "when" => Ok(Self::When),
            "then" => Ok(Self::Then),
            "and" => Ok(Self::And),
            "but" => Ok(Self::But),
            _ => Err(ParseStepKeywordError(value.to_owned())),
        }
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
