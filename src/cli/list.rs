//! List command implementation
//!
//! Prints the normalized rule set in order, as the scanner will run it.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_ERROR, EXIT_SUCCESS, load_rules};
use crate::rules::{PatternSource, Rule, RuleSet, normalize_flags};
use serde::Serialize;
use std::path::PathBuf;

/// JSONL output structure for one rule
#[derive(Debug, Serialize)]
struct JsonlRule<'a> {
    index: usize,
    kind: &'static str,
    pattern: Option<&'a str>,
    flags: Option<String>,
    message: &'a str,
}

impl<'a> JsonlRule<'a> {
    fn new(index: usize, rule: &'a Rule) -> Self {
        let (kind, pattern, flags) = match rule.source() {
            PatternSource::Plain(p) => ("pattern", Some(p), Some(normalize_flags(""))),
            PatternSource::Regexp { source, flags } => {
                ("regexp", Some(source), Some(normalize_flags(flags)))
            }
            PatternSource::Missing => ("none", None, None),
        };
        JsonlRule {
            index,
            kind,
            pattern,
            flags,
            message: &rule.message,
        }
    }
}

/// Run the list command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Error
pub fn run_list(rules: Option<PathBuf>, format: OutputFormat) -> i32 {
    match load_rules(rules) {
        Ok(set) => {
            print!("{}", format_rules(&set, format));
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_ERROR
        }
    }
}

/// Formats the rule set for display
pub(crate) fn format_rules(set: &RuleSet, format: OutputFormat) -> String {
    let mut output = String::new();

    match format {
        OutputFormat::Human => {
            output.push_str(&format!("Rules ({}):\n", set.len()));
            for (index, rule) in set.iter().enumerate() {
                let line = JsonlRule::new(index, rule);
                match (line.pattern, line.flags) {
                    (Some(pattern), Some(flags)) => output.push_str(&format!(
                        "  #{} {} /{}/{}\n",
                        index, line.kind, pattern, flags
                    )),
                    _ => output.push_str(&format!("  #{} (no pattern, never matches)\n", index)),
                }
                output.push_str(&format!("      {}\n", rule.message));
            }
        }
        OutputFormat::Jsonl => {
            for (index, rule) in set.iter().enumerate() {
                if let Ok(json) = serde_json::to_string(&JsonlRule::new(index, rule)) {
                    output.push_str(&json);
                    output.push('\n');
                }
            }
        }
    }

    output
}
