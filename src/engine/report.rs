#![forbid(unsafe_code)]

//! Match records and the per-document match report

use crate::engine::excerpt::Excerpt;
use crate::rules::{Rule, RuleSet};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One occurrence of one rule's pattern in one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// Line of the match start (1-indexed)
    pub line: usize,

    /// Length of `preceding_excerpt` plus one
    pub column: usize,

    /// Context before the match, cut at the nearest newline
    pub preceding_excerpt: String,

    /// Exact matched substring of the original text
    pub matched_text: String,

    /// Context after the match, cut at the nearest newline
    pub following_excerpt: String,

    /// Byte offset of the match start in the original text
    pub offset: usize,

    /// Rule that produced this record
    pub rule: Arc<Rule>,
}

impl MatchRecord {
    /// Builds a record from an extracted excerpt
    pub fn new(excerpt: &Excerpt<'_>, offset: usize, rule: Arc<Rule>) -> Self {
        MatchRecord {
            line: excerpt.line,
            column: excerpt.column,
            preceding_excerpt: excerpt.preceding.to_string(),
            matched_text: excerpt.matched.to_string(),
            following_excerpt: excerpt.following.to_string(),
            offset,
            rule,
        }
    }

    /// Byte offset one past the match end
    pub fn end_offset(&self) -> usize {
        self.offset + self.matched_text.len()
    }
}

/// A match record tagged with the document it was found in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub document_path: PathBuf,
    pub record: MatchRecord,
}

/// Aggregate result of scanning one document
///
/// `error_count` always equals the number of results, and `success` is true
/// exactly when there are none. `results` and `rules` are only present for
/// unsuccessful reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    success: bool,
    error_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    results: Option<Vec<ReportEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rules: Option<RuleSet>,
}

impl MatchReport {
    /// A successful report with no results
    pub fn passed() -> Self {
        MatchReport {
            success: true,
            error_count: 0,
            results: None,
            rules: None,
        }
    }

    /// Builds the report for `document_path` from its match records
    pub fn from_records(document_path: &Path, records: Vec<MatchRecord>, rules: &RuleSet) -> Self {
        if records.is_empty() {
            return Self::passed();
        }

        let results: Vec<ReportEntry> = records
            .into_iter()
            .map(|record| ReportEntry {
                document_path: document_path.to_path_buf(),
                record,
            })
            .collect();

        MatchReport {
            success: false,
            error_count: results.len(),
            results: Some(results),
            rules: Some(rules.clone()),
        }
    }

    /// True if no rule matched
    pub fn success(&self) -> bool {
        self.success
    }

    /// Number of match records
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Results, absent for successful reports
    pub fn results(&self) -> Option<&[ReportEntry]> {
        self.results.as_deref()
    }

    /// Rules used for the scan, absent for successful reports
    pub fn rules(&self) -> Option<&RuleSet> {
        self.rules.as_ref()
    }

    /// Iterates match records in report order
    pub fn records(&self) -> impl Iterator<Item = &MatchRecord> {
        self.results
            .iter()
            .flat_map(|results| results.iter().map(|entry| &entry.record))
    }
}

impl Default for MatchReport {
    fn default() -> Self {
        Self::passed()
    }
}
