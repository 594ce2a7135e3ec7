#![forbid(unsafe_code)]

//! Parallel document pipeline
//!
//! Compiles the rule set once and scans documents in parallel using rayon.
//! Each document's scan is independent; the only shared state is the
//! read-only compiled rule set.

use crate::engine::document::{Document, LintedDocument};
use crate::engine::file_walker::FileEntry;
use crate::engine::scanner::Scanner;
use rayon::prelude::*;

/// Result of running the pipeline over a batch of documents
#[derive(Debug)]
pub struct LintRun {
    /// Linted documents, in input order
    pub documents: Vec<LintedDocument>,
    /// Number of documents scanned
    pub documents_checked: usize,
    /// Number of rules in the rule set
    pub rules_executed: usize,
}

impl LintRun {
    /// True if every document passed
    pub fn passed(&self) -> bool {
        self.documents.iter().all(LintedDocument::passed)
    }

    /// Number of documents with at least one match
    pub fn documents_failed(&self) -> usize {
        self.documents.iter().filter(|d| !d.passed()).count()
    }

    /// Total match records across all documents
    pub fn total_errors(&self) -> usize {
        self.documents.iter().map(|d| d.report.error_count()).sum()
    }
}

/// Pipeline that scans documents against one compiled rule set
#[derive(Debug, Clone)]
pub struct LintPipeline {
    scanner: Scanner,
}

impl LintPipeline {
    /// Creates a pipeline around a compiled scanner
    pub fn new(scanner: Scanner) -> Self {
        Self { scanner }
    }

    /// The scanner used for every document
    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// Scans one document and attaches its report
    pub fn lint_document(&self, document: Document) -> LintedDocument {
        let report = self.scanner.scan_document(&document);
        LintedDocument { document, report }
    }

    /// Scans documents in parallel, preserving input order
    pub fn lint(&self, documents: Vec<Document>) -> LintRun {
        let documents_checked = documents.len();
        let documents: Vec<LintedDocument> = documents
            .into_par_iter()
            .map(|document| self.lint_document(document))
            .collect();

        LintRun {
            documents,
            documents_checked,
            rules_executed: self.scanner.rules().len(),
        }
    }

    /// Reads and scans discovered files in parallel
    ///
    /// Files that cannot be read are logged and skipped.
    pub fn lint_files(&self, files: Vec<FileEntry>) -> LintRun {
        let documents: Vec<Document> = files
            .into_par_iter()
            .filter_map(|file| match Document::read(&file.path) {
                Ok(document) => Some(document.with_base(&file.root)),
                Err(e) => {
                    tracing::warn!("failed to read file {}: {}", file.path.display(), e);
                    None
                }
            })
            .collect();

        self.lint(documents)
    }
}
