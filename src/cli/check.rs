//! Check command implementation
//!
//! This module implements the `patternlint check` command, which:
//! - Loads the rule set from `--rules` or `.patternlintrc`
//! - Discovers files under the given paths
//! - Scans every file in parallel
//! - Reports failing files (human or JSONL)
//! - Returns a non-zero exit code if any file matched a rule

use crate::cli::args::{ColorChoice, OutputFormat};
use crate::cli::common::{EXIT_SUCCESS, exit_code_for, load_rules};
use crate::engine::file_walker::{GlobPattern, discover_files};
use crate::engine::{InvalidPatternPolicy, LintPipeline, ScanOptions, Scanner, first_failure};
use crate::error::LintError;
use crate::output::{HumanReporter, JsonlReporter, Reporter, report_all};
use std::path::PathBuf;
use termcolor::StandardStream;

/// Options for a check run
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub paths: Vec<PathBuf>,
    pub rules: Option<PathBuf>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub format: OutputFormat,
    pub skip_invalid_patterns: bool,
    pub color: ColorChoice,
}

/// Run the check command
///
/// # Returns
///
/// Exit code:
/// - 0: Success (no rule matched)
/// - 1: At least one file matched a rule
/// - 2: Error (configuration/I/O error)
/// - 3: A rule pattern did not compile
pub fn run_check(options: CheckOptions) -> i32 {
    match run_check_inner(options) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    }
}

fn run_check_inner(options: CheckOptions) -> Result<(), LintError> {
    let rules = load_rules(options.rules)?;

    if rules.is_empty() {
        tracing::warn!("no rules configured, nothing to check");
        return Ok(());
    }

    let policy = if options.skip_invalid_patterns {
        InvalidPatternPolicy::Skip
    } else {
        InvalidPatternPolicy::Abort
    };
    let scanner = Scanner::with_options(
        rules,
        ScanOptions {
            on_invalid_pattern: policy,
        },
    )?;

    let include: Vec<GlobPattern> = options.include.into_iter().map(GlobPattern::from).collect();
    let exclude: Vec<GlobPattern> = options.exclude.into_iter().map(GlobPattern::from).collect();
    let files = discover_files(&options.paths, &include, &exclude)?;

    if files.is_empty() {
        tracing::warn!(paths = ?options.paths, "no files found to check");
        return Ok(());
    }

    tracing::info!(
        files = files.len(),
        rules = scanner.rules().len(),
        "checking files"
    );

    let pipeline = LintPipeline::new(scanner);
    let run = pipeline.lint_files(files);

    let reporter: &dyn Reporter = match options.format {
        OutputFormat::Human => &HumanReporter,
        OutputFormat::Jsonl => &JsonlReporter,
    };
    let mut stdout = StandardStream::stdout(options.color.resolve());
    report_all(reporter, &run, &mut stdout)?;

    first_failure(&run.documents)
}
