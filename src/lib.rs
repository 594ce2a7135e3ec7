#![forbid(unsafe_code)]

//! patternlint: pattern rules as a build gate
//!
//! Scans text documents against an ordered set of pattern rules and reports
//! every match with its line, column and a short excerpt. A document passes
//! only if no rule matches it.
//!
//! ```
//! use patternlint::engine::scan;
//! use patternlint::rules::{Rule, RuleInput};
//!
//! let rules = RuleInput::Single(Rule::with_pattern("console.log", "no logs")).normalize();
//! let report = scan("a\nb console.log(1)\nc", &rules).unwrap();
//!
//! assert!(!report.success());
//! assert_eq!(report.error_count(), 1);
//! assert_eq!(report.records().next().unwrap().line, 2);
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;

// Re-export error types for convenient access
pub use error::{ConfigError, LintError, RuleError};

// Re-export core types for convenient access
pub use engine::{Document, MatchRecord, MatchReport, Scanner, scan};
pub use rules::{Rule, RuleInput, RuleSet};
pub use engine::file_walker::GlobPattern;
