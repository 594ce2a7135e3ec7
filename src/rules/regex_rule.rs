#![forbid(unsafe_code)]

//! Compilation of rule descriptors into regular expressions
//!
//! Every rule is compiled for "find all occurrences" semantics. A `pattern`
//! rule gets no other modifier; a `regexp` rule adds its own flags, with
//! duplicates collapsed.

use crate::error::RuleError;
use crate::rules::{PatternSource, Rule};
use regex::{Regex, RegexBuilder};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Modifier that is always applied
const GLOBAL_FLAG: char = 'g';

/// A rule paired with its compiled matcher
///
/// `matcher` is `None` for rules that carry neither a `pattern` nor a
/// `regexp`; such rules never match.
#[derive(Clone)]
pub struct CompiledRule {
    index: usize,
    rule: Arc<Rule>,
    matcher: Option<Regex>,
}

impl std::fmt::Debug for CompiledRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledRule")
            .field("index", &self.index)
            .field("matcher", &self.matcher.as_ref().map(Regex::as_str))
            .field("message", &self.rule.message)
            .finish()
    }
}

impl CompiledRule {
    /// Compiles the rule at `index` of its rule set
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidRegex` if the source does not parse and
    /// `RuleError::UnsupportedFlag` for a modifier with no regex equivalent.
    pub fn compile(index: usize, rule: Arc<Rule>) -> Result<Self, RuleError> {
        let matcher = match rule.source() {
            PatternSource::Plain(pattern) => Some(build_regex(index, pattern, "")?),
            PatternSource::Regexp { source, flags } => Some(build_regex(index, source, flags)?),
            PatternSource::Missing => {
                tracing::warn!(
                    rule = index,
                    message = %rule.message,
                    "rule has neither `pattern` nor `regexp` and will never match"
                );
                None
            }
        };

        Ok(CompiledRule {
            index,
            rule,
            matcher,
        })
    }

    /// Position of the rule in its rule set
    pub fn index(&self) -> usize {
        self.index
    }

    /// The descriptor this rule was compiled from
    pub fn rule(&self) -> &Arc<Rule> {
        &self.rule
    }

    /// Compiled matcher, if the rule has a pattern
    pub fn matcher(&self) -> Option<&Regex> {
        self.matcher.as_ref()
    }
}

/// Collapses duplicate modifiers and adds the global modifier
///
/// The result is sorted, so `"gig"` and `"ig"` both become `"gi"`.
pub fn normalize_flags(flags: &str) -> String {
    let mut set: BTreeSet<char> = flags.chars().collect();
    set.insert(GLOBAL_FLAG);
    set.into_iter().collect()
}

fn build_regex(index: usize, source: &str, flags: &str) -> Result<Regex, RuleError> {
    let mut builder = RegexBuilder::new(source);

    for flag in normalize_flags(flags).chars() {
        match flag {
            // Iteration over all matches is how the scanner always runs
            'g' => {}
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            'u' => {
                builder.unicode(true);
            }
            'x' => {
                builder.ignore_whitespace(true);
            }
            other => return Err(RuleError::UnsupportedFlag { index, flag: other }),
        }
    }

    builder.build().map_err(|e| RuleError::InvalidRegex {
        index,
        pattern: source.to_string(),
        message: e.to_string(),
    })
}
