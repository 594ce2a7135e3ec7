#![forbid(unsafe_code)]

//! JSONL reporter for machine-readable output
//!
//! Emits one `match` record per occurrence of every failing document, in
//! document order, followed by a single `status` record.

use crate::engine::{LintRun, LintedDocument};
use crate::output::Reporter;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use termcolor::WriteColor;

/// JSONL reporter
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonlReporter;

impl JsonlReporter {
    /// Creates a new JsonlReporter
    pub fn new() -> Self {
        JsonlReporter
    }
}

/// Match record for JSONL output
#[derive(Debug, Serialize)]
struct MatchLine<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    file: PathBuf,
    line: usize,
    column: usize,
    pre: &'a str,
    #[serde(rename = "match")]
    matched: &'a str,
    post: &'a str,
    message: &'a str,
}

/// Status record for JSONL output
#[derive(Debug, Serialize)]
struct StatusLine {
    #[serde(rename = "type")]
    record_type: &'static str,
    passed: bool,
    documents_checked: usize,
    documents_failed: usize,
    total_errors: usize,
}

fn write_line(out: &mut dyn WriteColor, value: &impl Serialize) -> io::Result<()> {
    let json = serde_json::to_string(value).map_err(io::Error::other)?;
    writeln!(out, "{}", json)
}

impl Reporter for JsonlReporter {
    fn report(&self, linted: &LintedDocument, out: &mut dyn WriteColor) -> io::Result<()> {
        let file = linted.document.display_path();
        for record in linted.report.records() {
            write_line(
                out,
                &MatchLine {
                    record_type: "match",
                    file: file.clone(),
                    line: record.line,
                    column: record.column,
                    pre: &record.preceding_excerpt,
                    matched: &record.matched_text,
                    post: &record.following_excerpt,
                    message: &record.rule.message,
                },
            )?;
        }
        Ok(())
    }

    fn finish(&self, run: &LintRun, out: &mut dyn WriteColor) -> io::Result<()> {
        write_line(
            out,
            &StatusLine {
                record_type: "status",
                passed: run.passed(),
                documents_checked: run.documents_checked,
                documents_failed: run.documents_failed(),
                total_errors: run.total_errors(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Document, LintPipeline, Scanner};
    use crate::output::report_all;
    use crate::rules::{Rule, RuleInput};
    use serde_json::Value;
    use termcolor::Buffer;

    fn render(documents: Vec<Document>) -> Vec<Value> {
        let rules = RuleInput::Many(vec![
            Rule::with_pattern("debugger", "no debugger"),
            Rule::with_regexp("http:", Some("i"), "use https"),
        ])
        .normalize();
        let run = LintPipeline::new(Scanner::new(rules).unwrap()).lint(documents);

        let mut buffer = Buffer::no_color();
        report_all(&JsonlReporter::new(), &run, &mut buffer).unwrap();
        String::from_utf8(buffer.into_inner())
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_match_and_status_records() {
        let lines = render(vec![
            Document::new("ok.js", "let a;"),
            Document::new("bad.js", "debugger;\nfetch('HTTP://x')"),
        ]);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["type"], "match");
        assert_eq!(lines[0]["file"], "bad.js");
        assert_eq!(lines[0]["line"], 1);
        assert_eq!(lines[0]["match"], "debugger");
        assert_eq!(lines[0]["post"], ";");
        assert_eq!(lines[1]["line"], 2);
        assert_eq!(lines[1]["column"], 8);
        assert_eq!(lines[1]["pre"], "fetch('");
        assert_eq!(lines[1]["message"], "use https");

        assert_eq!(lines[2]["type"], "status");
        assert_eq!(lines[2]["passed"], false);
        assert_eq!(lines[2]["documents_checked"], 2);
        assert_eq!(lines[2]["documents_failed"], 1);
        assert_eq!(lines[2]["total_errors"], 2);
    }

    #[test]
    fn test_clean_run_only_status() {
        let lines = render(vec![Document::new("ok.js", "let a;")]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["type"], "status");
        assert_eq!(lines[0]["passed"], true);
    }
}
