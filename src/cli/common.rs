//! Common helper functions shared across CLI commands

use crate::config::RuleSource;
use crate::error::{ConfigError, LintError};
use crate::rules::RuleSet;
use std::path::PathBuf;

/// Every document passed
pub const EXIT_SUCCESS: i32 = 0;
/// At least one document had a rule match
pub const EXIT_LINT_FAILED: i32 = 1;
/// Configuration or I/O error
pub const EXIT_ERROR: i32 = 2;
/// A rule pattern did not compile
pub const EXIT_PATTERN_ERROR: i32 = 3;

/// Loads the rule set from `--rules` or `.patternlintrc`
///
/// # Errors
///
/// Returns `ConfigError` if no rule source can be resolved or parsed.
pub(crate) fn load_rules(rules: Option<PathBuf>) -> Result<RuleSet, ConfigError> {
    RuleSource::from(rules).load()
}

/// Maps an error to the process exit code
pub(crate) fn exit_code_for(error: &LintError) -> i32 {
    match error {
        LintError::Rule(_) => EXIT_PATTERN_ERROR,
        LintError::LintFailed { .. } => EXIT_LINT_FAILED,
        _ => EXIT_ERROR,
    }
}
