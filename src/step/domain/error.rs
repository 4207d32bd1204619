//! Error types for step patterns and scenario lines.

use thiserror::Error;

/// Errors raised while compiling a step pattern.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StepPatternError {
    /// The pattern is empty after trimming.
    #[error("step pattern cannot be empty")]
    Empty,

    /// A `{` opened a placeholder that was never closed.
    #[error("unclosed placeholder at byte {position} in step pattern '{pattern}'")]
    UnclosedPlaceholder {
        /// The pattern text.
        pattern: String,
        /// Byte offset of the opening brace.
        position: usize,
    },

    /// A `}` appeared outside a placeholder.
    #[error("unmatched closing brace at byte {position} in step pattern '{pattern}'")]
    UnmatchedClosingBrace {
        /// The pattern text.
        pattern: String,
        /// Byte offset of the closing brace.
        position: usize,
    },

    /// A placeholder name is not an identifier.
    #[error("invalid placeholder name '{name}' in step pattern '{pattern}'")]
    InvalidPlaceholderName {
        /// The pattern text.
        pattern: String,
        /// The offending name.
        name: String,
    },

    /// A placeholder name occurs twice in one pattern.
    #[error("duplicate placeholder '{name}' in step pattern '{pattern}'")]
    DuplicatePlaceholder {
        /// The pattern text.
        pattern: String,
        /// The repeated name.
        name: String,
    },

    /// The compiled expression was rejected by the regex engine.
    #[error("step pattern '{pattern}' failed to compile: {reason}")]
    Compile {
        /// The pattern text.
        pattern: String,
        /// Regex engine message.
        reason: String,
    },
}

/// Error returned when a scenario line keyword is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown step keyword: {0}")]
pub struct ParseStepKeywordError(pub String);

/// Errors raised while building scenario lines.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScenarioLineError {
    /// The line does not start with a Gherkin keyword.
    #[error(transparent)]
    UnknownKeyword(#[from] ParseStepKeywordError),

    /// The line has a keyword but no step text.
    #[error("step line '{0}' has no text after its keyword")]
    MissingText(String),

    /// An `And`/`But` line has no earlier line to take its kind from.
    #[error("step '{0}' starts with a conjunction but no step precedes it")]
    DanglingConjunction(String),
}

impl ScenarioLineError {
    /// Builds a dangling-conjunction error for the given text.
    #[must_use]
    pub fn dangling(text: &str) -> Self {
        Self::DanglingConjunction(text.to_owned())
    }
}
