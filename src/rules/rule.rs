#![forbid(unsafe_code)]

//! Rule descriptor as written in rule configuration files

use serde::{Deserialize, Serialize};

/// One pattern to enforce, plus the message shown when it matches
///
/// Deserialized from `{ "pattern"?, "regexp"?, "flags"?, "message" }`.
/// Unknown keys are ignored and a missing message defaults to "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Plain pattern, compiled with only the global modifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Regular-expression source, used only when `pattern` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regexp: Option<String>,

    /// Modifiers applied to `regexp`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<String>,

    /// Human-readable explanation
    #[serde(default)]
    pub message: String,
}

/// The pattern field a rule will actually be compiled from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSource<'a> {
    /// `pattern` field
    Plain(&'a str),
    /// `regexp` field with its (possibly empty) flags
    Regexp { source: &'a str, flags: &'a str },
    /// Neither field carries a pattern
    Missing,
}

impl Rule {
    /// Creates a rule from a plain pattern
    pub fn with_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Rule {
            pattern: Some(pattern.into()),
            message: message.into(),
            ..Default::default()
        }
    }

    /// Creates a rule from a regular-expression source and optional flags
    pub fn with_regexp(
        source: impl Into<String>,
        flags: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Rule {
            regexp: Some(source.into()),
            flags: flags.map(str::to_string),
            message: message.into(),
            ..Default::default()
        }
    }

    /// Resolves which field the rule is compiled from
    ///
    /// A non-empty `pattern` wins; otherwise a non-empty `regexp` is used.
    /// Empty strings count as absent.
    pub fn source(&self) -> PatternSource<'_> {
        match (self.pattern.as_deref(), self.regexp.as_deref()) {
            (Some(pattern), _) if !pattern.is_empty() => PatternSource::Plain(pattern),
            (_, Some(source)) if !source.is_empty() => PatternSource::Regexp {
                source,
                flags: self.flags.as_deref().unwrap_or(""),
            },
            _ => PatternSource::Missing,
        }
    }

    /// Returns the pattern text for display, if any
    pub fn display_pattern(&self) -> Option<&str> {
        match self.source() {
            PatternSource::Plain(p) => Some(p),
            PatternSource::Regexp { source, .. } => Some(source),
            PatternSource::Missing => None,
        }
    }
}
