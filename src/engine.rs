//! Scan engine, match reports and the document pipeline

pub mod document;
pub mod excerpt;
pub mod file_walker;
pub mod gate;
pub mod pipeline;
pub mod report;
pub mod scanner;
mod spans;

pub use document::{Document, LintedDocument};
pub use gate::{fail_on_errors, first_failure};
pub use pipeline::{LintPipeline, LintRun};
pub use report::{MatchRecord, MatchReport, ReportEntry};
pub use scanner::{InvalidPatternPolicy, ScanOptions, Scanner, scan};
