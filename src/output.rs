#![forbid(unsafe_code)]

//! Reporters (human and JSONL)

pub mod human;
pub mod jsonl;

pub use human::HumanReporter;
pub use jsonl::JsonlReporter;

use crate::engine::{LintRun, LintedDocument};
use std::io;
use termcolor::WriteColor;

/// Renders linted documents
///
/// `report` is only called for documents whose report is unsuccessful.
/// Implement this trait to plug in a custom reporter.
pub trait Reporter {
    /// Renders one failing document
    fn report(&self, linted: &LintedDocument, out: &mut dyn WriteColor) -> io::Result<()>;

    /// Renders a summary after all documents
    fn finish(&self, _run: &LintRun, _out: &mut dyn WriteColor) -> io::Result<()> {
        Ok(())
    }
}

/// Drives `reporter` over every failing document of `run`, then `finish`
pub fn report_all(
    reporter: &dyn Reporter,
    run: &LintRun,
    out: &mut dyn WriteColor,
) -> io::Result<()> {
    for linted in run.documents.iter().filter(|d| !d.passed()) {
        reporter.report(linted, out)?;
    }
    reporter.finish(run, out)
}
