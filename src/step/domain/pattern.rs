//! Step pattern compilation and placeholder extraction.
//!
//! A pattern is a sequence of literal segments and named capture slots
//! written as `{name}`. Doubled braces (`{{`, `}}`) stand for literal braces.
//! Patterns compile to an anchored regular expression in which each slot
//! lazily matches one or more characters.

use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use super::{StepArguments, StepPatternError};

/// Stand-in for a placeholder value when a pattern is rendered as a line.
const PLACEHOLDER_SAMPLE: &str = "\u{0}";

/// One piece of a compiled step pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    /// Text that must appear verbatim.
    Literal(String),
    /// Named capture slot.
    Placeholder(String),
}

/// A compiled step pattern.
#[derive(Debug, Clone)]
pub struct StepPattern {
    raw: String,
    segments: Vec<PatternSegment>,
    regex: Regex,
}

impl StepPattern {
    /// Compiles a pattern such as `we implement a {kind} test`.
    ///
    /// # Errors
    ///
    /// Returns [`StepPatternError`] when the pattern is empty, has unbalanced
    /// braces, or declares an invalid or repeated placeholder name.
    pub fn parse(raw: impl Into<String>) -> Result<Self, StepPatternError> {
        let raw_pattern = raw.into();
        if raw_pattern.trim().is_empty() {
            return Err(StepPatternError::Empty);
        }

        let segments = tokenize(&raw_pattern)?;
        let source = regex_source(&segments);
        let regex = Regex::new(&source).map_err(|error| StepPatternError::Compile {
            pattern: raw_pattern.clone(),
            reason: error.to_string(),
        })?;

        Ok(Self {
            raw: raw_pattern,
            segments,
            regex,
        })
    }

    /// Returns the pattern text as registered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the literal and placeholder segments in order.
    #[must_use]
    pub fn segments(&self) -> &[PatternSegment] {
        &self.segments
    }

    /// Returns placeholder names in the order they appear.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            PatternSegment::Placeholder(name) => Some(name.as_str()),
            PatternSegment::Literal(_) => None,
        })
    }

    /// Returns whether the whole of `text` matches this pattern.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Matches `text` and extracts placeholder values.
    ///
    /// Returns `None` when the text does not match.
    #[must_use]
    pub fn captures(&self, text: &str) -> Option<StepArguments> {
        let captures = self.regex.captures(text)?;
        let values = self
            .placeholders()
            .map(|name| {
                captures
                    .name(name)
                    .map(|value| (name.to_owned(), value.as_str().to_owned()))
            })
            .collect::<Option<Vec<_>>>()?;
        Some(StepArguments::new(values))
    }

    /// Renders the line this pattern stands for: literals unescaped and each
    /// placeholder as a NUL character, which no step line contains.
    #[must_use]
    pub(crate) fn sample_line(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                PatternSegment::Literal(text) => text.as_str(),
                PatternSegment::Placeholder(_) => PLACEHOLDER_SAMPLE,
            })
            .collect()
    }
}

impl PartialEq for StepPattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for StepPattern {}

impl fmt::Display for StepPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn tokenize(pattern: &str) -> Result<Vec<PatternSegment>, StepPatternError> {
    let mut segments = Vec::new();
    let mut names = HashSet::new();
    let mut literal = String::new();
    let mut chars = pattern.char_indices().peekable();

    while let Some((position, character)) = chars.next() {
        match character {
            '{' if chars.next_if(|&(_, next)| next == '{').is_some() => literal.push('{'),
            '}' if chars.next_if(|&(_, next)| next == '}').is_some() => literal.push('}'),
            '{' => {
                let name = read_placeholder_name(&mut chars, pattern, position)?;
                if !names.insert(name.clone()) {
                    return Err(StepPatternError::DuplicatePlaceholder {
                        pattern: pattern.to_owned(),
                        name,
                    });
                }
                if !literal.is_empty() {
                    segments.push(PatternSegment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(PatternSegment::Placeholder(name));
            }
            '}' => {
                return Err(StepPatternError::UnmatchedClosingBrace {
                    pattern: pattern.to_owned(),
                    position,
                });
            }
            _ => literal.push(character),
        }
    }

    if !literal.is_empty() {
        segments.push(PatternSegment::Literal(literal));
    }
    Ok(segments)
}

fn read_placeholder_name(
    chars: &mut Peekable<CharIndices<'_>>,
    pattern: &str,
    opening: usize,
) -> Result<String, StepPatternError> {
    let mut name = String::new();
    for (_, character) in chars.by_ref() {
        if character == '}' {
            if !is_identifier(&name) {
                return Err(StepPatternError::InvalidPlaceholderName {
                    pattern: pattern.to_owned(),
                    name,
                });
            }
            return Ok(name);
        }
        name.push(character);
    }
    Err(StepPatternError::UnclosedPlaceholder {
        pattern: pattern.to_owned(),
        position: opening,
    })
}

fn is_identifier(name: &str) -> bool {
    let mut characters = name.chars();
    characters
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && characters.all(|rest| rest.is_ascii_alphanumeric() || rest == '_')
}

fn regex_source(segments: &[PatternSegment]) -> String {
    let mut source = String::from("^");
    for segment in segments {
        match segment {
            PatternSegment::Literal(text) => source.push_str(&regex::escape(text)),
            PatternSegment::Placeholder(name) => {
                source.push_str("(?P<");
                source.push_str(name);
                source.push_str(">.+?)");
            }
        }
    }
    source.push('$');
    source
}
