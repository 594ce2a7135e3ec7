#![forbid(unsafe_code)]

//! Scan engine: runs a rule set against document text
//!
//! Rules run in order. Each occurrence is consumed by the first rule that
//! reports it. Later searches only run inside the unconsumed gaps between
//! consumed spans, so text next to a consumed span can still match.

use crate::engine::document::Document;
use crate::engine::excerpt::{Excerpt, LineIndex};
use crate::engine::report::{MatchRecord, MatchReport};
use crate::engine::spans::ConsumedSpans;
use crate::error::RuleError;
use crate::rules::{CompiledRule, RuleSet};
use std::path::Path;
use std::sync::Arc;

/// What to do with a rule whose pattern does not compile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidPatternPolicy {
    /// Fail the whole scan
    #[default]
    Abort,
    /// Drop the rule and keep scanning with the others
    Skip,
}

/// Scanner configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    pub on_invalid_pattern: InvalidPatternPolicy,
}

/// A rule set compiled once and reusable across documents
///
/// `Scanner` holds no per-document state, so one instance can scan many
/// documents concurrently.
#[derive(Debug, Clone)]
pub struct Scanner {
    rules: RuleSet,
    compiled: Vec<CompiledRule>,
}

impl Scanner {
    /// Compiles `rules`, failing on the first invalid pattern
    ///
    /// # Errors
    ///
    /// Returns the `RuleError` of the first rule that does not compile.
    pub fn new(rules: RuleSet) -> Result<Self, RuleError> {
        Self::with_options(rules, ScanOptions::default())
    }

    /// Compiles `rules` with an explicit invalid-pattern policy
    ///
    /// # Errors
    ///
    /// Returns a `RuleError` only under `InvalidPatternPolicy::Abort`.
    pub fn with_options(rules: RuleSet, options: ScanOptions) -> Result<Self, RuleError> {
        let mut compiled = Vec::with_capacity(rules.len());

        for (index, rule) in rules.iter().enumerate() {
            match CompiledRule::compile(index, Arc::clone(rule)) {
                Ok(rule) => compiled.push(rule),
                Err(e) => match options.on_invalid_pattern {
                    InvalidPatternPolicy::Abort => return Err(e),
                    InvalidPatternPolicy::Skip => {
                        tracing::warn!("skipping rule: {}", e);
                    }
                },
            }
        }

        tracing::debug!(
            rules = rules.len(),
            compiled = compiled.len(),
            "compiled rule set"
        );

        Ok(Scanner { rules, compiled })
    }

    /// The normalized rule set this scanner was built from
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Number of rules that will actually run
    pub fn compiled_len(&self) -> usize {
        self.compiled.len()
    }

    /// Scans a document
    ///
    /// Documents without contents produce a successful report.
    pub fn scan_document(&self, document: &Document) -> MatchReport {
        match document.contents() {
            Some(text) => self.scan_text(&document.display_path(), text),
            None => MatchReport::passed(),
        }
    }

    /// Scans `text`, attributing every result to `document_path`
    pub fn scan_text(&self, document_path: &Path, text: &str) -> MatchReport {
        let records = self.find_records(text);
        if !records.is_empty() {
            tracing::debug!(
                path = %document_path.display(),
                matches = records.len(),
                "rules matched"
            );
        }
        MatchReport::from_records(document_path, records, &self.rules)
    }

    /// Finds every accepted occurrence of every rule, in rule order
    pub fn find_records(&self, text: &str) -> Vec<MatchRecord> {
        let lines = LineIndex::new(text);
        let mut consumed = ConsumedSpans::new();
        let mut records = Vec::new();

        for compiled in &self.compiled {
            let Some(matcher) = compiled.matcher() else {
                continue;
            };

            let mut from = 0;
            while let Some(gap) = consumed.next_gap(from, text.len()) {
                // The haystack ends where the next consumed span begins
                let Some(found) = matcher.find_at(&text[..gap.end], gap.start) else {
                    from = gap.end;
                    continue;
                };
                let span = found.range();

                // Empty matches consume nothing and are never reported
                if span.is_empty() {
                    from = next_char_boundary(text, span.start);
                    continue;
                }

                let excerpt = Excerpt::extract(text, &lines, span.clone());
                records.push(MatchRecord::new(
                    &excerpt,
                    span.start,
                    Arc::clone(compiled.rule()),
                ));
                from = span.end;
                consumed.insert(span);
            }
        }

        records
    }
}

/// Byte offset of the char after the one starting at `offset`
fn next_char_boundary(text: &str, offset: usize) -> usize {
    offset
        + text[offset..]
            .chars()
            .next()
            .map_or(1, char::len_utf8)
}

/// Scans `text` against `rules` in one call
///
/// Results are attributed to `stdin`. Use `Scanner` to reuse compiled rules
/// across documents.
///
/// # Errors
///
/// Returns a `RuleError` if any rule pattern does not compile.
pub fn scan(text: &str, rules: &RuleSet) -> Result<MatchReport, RuleError> {
    let scanner = Scanner::new(rules.clone())?;
    Ok(scanner.scan_document(&Document::stdin(text)))
}
