//! Scenario lines as handed over by a feature source.

use serde::{Deserialize, Serialize};

use super::{ScenarioLineError, StepKeyword, StepKind};

/// One scenario line with its resolved kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioStep {
    keyword: StepKeyword,
    kind: StepKind,
    text: String,
}

impl ScenarioStep {
    /// Creates a step whose keyword names its kind directly.
    #[must_use]
    pub fn new(kind: StepKind, text: impl Into<String>) -> Self {
        Self {
            keyword: kind.into(),
            kind,
            text: text.into(),
        }
    }

    /// Parses a `Keyword text` line.
    ///
    /// `previous` supplies the kind inherited by `And`/`But` lines.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioLineError`] when the keyword is unknown, the text is
    /// empty, or a conjunction has no preceding kind.
    pub fn parse_line(line: &str, previous: Option<StepKind>) -> Result<Self, ScenarioLineError> {
        let trimmed = line.trim();
        let (word, rest) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));
        let keyword: StepKeyword = word.parse()?;
        let text = rest.trim();
        if text.is_empty() {
            return Err(ScenarioLineError::MissingText(trimmed.to_owned()));
        }
        let kind = keyword
            .kind()
            .or(previous)
            .ok_or_else(|| ScenarioLineError::dangling(trimmed))?;
        Ok(Self {
            keyword,
            kind,
            text: text.to_owned(),
        })
    }

    /// Returns the keyword as written.
    #[must_use]
    pub const fn keyword(&self) -> StepKeyword {
        self.keyword
    }

    /// Returns the kind used for handler lookup.
    #[must_use]
    pub const fn kind(&self) -> StepKind {
        self.kind
    }

    /// Returns the step text without its keyword.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A named, ordered list of steps sharing one context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    name: String,
    steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Creates an empty scenario.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Builds a scenario from `Keyword text` lines.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScenarioLineError`] encountered.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepwise::step::domain::{Scenario, StepKind};
    ///
    /// let scenario = Scenario::from_lines(
    ///     "inherits kinds",
    ///     ["Given we have behave installed", "And we have (behave) installed"],
    /// )
    /// .expect("lines are well formed");
    /// assert_eq!(scenario.steps()[1].kind(), StepKind::Given);
    /// ```
    pub fn from_lines<'a>(
        name: impl Into<String>,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, ScenarioLineError> {
        let mut scenario = Self::new(name);
        for line in lines {
            let previous = scenario.steps.last().map(ScenarioStep::kind);
            scenario
                .steps
                .push(ScenarioStep::parse_line(line, previous)?);
        }
        Ok(scenario)
    }

    /// Appends a step of the given kind.
    #[must_use]
    pub fn with_step(mut self, kind: StepKind, text: impl Into<String>) -> Self {
        self.steps.push(ScenarioStep::new(kind, text));
        self
    }

    /// Returns the scenario name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the steps in order.
    #[must_use]
    pub fn steps(&self) -> &[ScenarioStep] {
        &self.steps
    }
}
