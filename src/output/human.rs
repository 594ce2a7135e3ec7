#![forbid(unsafe_code)]

//! Colorized console reporter
//!
//! ```text
//! 1 error found in src/app.js
//! [L2:C3] Excerpt: "b console.log(1)"
//! Don't leave console statements in your JS.
//! ```

use crate::engine::{LintRun, LintedDocument};
use crate::output::Reporter;
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Default human-readable reporter
#[derive(Debug, Default, Clone, Copy)]
pub struct HumanReporter;

impl HumanReporter {
    /// Creates a new HumanReporter
    pub fn new() -> Self {
        HumanReporter
    }
}

fn fg(color: Color) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color));
    spec
}

fn write_colored(out: &mut dyn WriteColor, spec: &ColorSpec, text: &str) -> io::Result<()> {
    out.set_color(spec)?;
    write!(out, "{}", text)?;
    out.reset()
}

impl Reporter for HumanReporter {
    fn report(&self, linted: &LintedDocument, out: &mut dyn WriteColor) -> io::Result<()> {
        let error_count = linted.report.error_count();
        let plural = if error_count == 1 { "" } else { "s" };

        write_colored(out, &fg(Color::Cyan), &error_count.to_string())?;
        write!(out, " error{} found in ", plural)?;
        write_colored(
            out,
            &fg(Color::Magenta),
            &linted.document.display_path().display().to_string(),
        )?;
        writeln!(out)?;

        let mut highlight = ColorSpec::new();
        highlight.set_bg(Some(Color::Red));

        for record in linted.report.records() {
            write_colored(out, &fg(Color::Red), "[")?;
            write_colored(out, &fg(Color::Yellow), &format!("L{}", record.line))?;
            write_colored(out, &fg(Color::Red), ":")?;
            write_colored(out, &fg(Color::Yellow), &format!("C{}", record.column))?;
            write_colored(out, &fg(Color::Red), "] ")?;
            write!(out, "Excerpt: ")?;
            write_colored(
                out,
                &fg(Color::Cyan),
                &format!("\"{}", record.preceding_excerpt),
            )?;
            write_colored(out, &highlight, &record.matched_text)?;
            write_colored(
                out,
                &fg(Color::Cyan),
                &format!("{}\"", record.following_excerpt),
            )?;
            writeln!(out)?;
            write_colored(out, &fg(Color::Yellow), &record.rule.message)?;
            writeln!(out)?;
        }

        Ok(())
    }

    fn finish(&self, run: &LintRun, out: &mut dyn WriteColor) -> io::Result<()> {
        if run.passed() {
            write_colored(out, &fg(Color::Green), "Pattern lint PASSED")?;
            writeln!(out, ": {} document(s) checked", run.documents_checked)
        } else {
            write_colored(out, &fg(Color::Red), "Pattern lint FAILED")?;
            writeln!(
                out,
                ": {} error(s) in {} of {} document(s)",
                run.total_errors(),
                run.documents_failed(),
                run.documents_checked
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Document, LintPipeline, Scanner};
    use crate::output::report_all;
    use crate::rules::{Rule, RuleInput};
    use termcolor::Buffer;

    fn run(documents: Vec<Document>) -> LintRun {
        let rules = RuleInput::Single(Rule::with_pattern(
            "console.log",
            "Don't leave console statements in your JS.",
        ))
        .normalize();
        LintPipeline::new(Scanner::new(rules).unwrap()).lint(documents)
    }

    fn render(run: &LintRun) -> String {
        let mut buffer = Buffer::no_color();
        report_all(&HumanReporter::new(), run, &mut buffer).unwrap();
        String::from_utf8(buffer.into_inner()).unwrap()
    }

    #[test]
    fn test_single_error_output() {
        let output = render(&run(vec![Document::new(
            "src/app.js",
            "a\nb console.log(1)\nc",
        )]));

        assert!(output.contains("1 error found in src/app.js\n"));
        assert!(output.contains("[L2:C3] Excerpt: \"b console.log(1)\"\n"));
        assert!(output.contains("Don't leave console statements in your JS.\n"));
        assert!(output.contains("Pattern lint FAILED: 1 error(s) in 1 of 1 document(s)"));
    }

    #[test]
    fn test_plural_errors() {
        let output = render(&run(vec![Document::new(
            "app.js",
            "console.log(1);\nconsole.log(2);\n",
        )]));
        assert!(output.contains("2 errors found in app.js"));
        assert!(output.contains("[L1:C1]"));
        assert!(output.contains("[L2:C1]"));
    }

    #[test]
    fn test_successful_documents_not_rendered() {
        let output = render(&run(vec![Document::new("clean.js", "let a = 1;")]));
        assert!(!output.contains("clean.js"));
        assert!(output.contains("Pattern lint PASSED: 1 document(s) checked"));
    }

    #[test]
    fn test_colored_output_contains_escapes() {
        let linted = run(vec![Document::new("app.js", "console.log(1)")]);
        let mut buffer = Buffer::ansi();
        HumanReporter::new()
            .report(&linted.documents[0], &mut buffer)
            .unwrap();
        let output = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(output.contains("\x1b["));
        assert!(output.contains("console.log"));
    }
}
