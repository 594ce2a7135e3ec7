//! CLI argument parsing using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for patternlint commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl ColorChoice {
    /// Resolves to a termcolor choice, checking whether stdout is a terminal
    pub fn resolve(self) -> termcolor::ColorChoice {
        use std::io::IsTerminal;
        match self {
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
            ColorChoice::Auto if std::io::stdout().is_terminal() => termcolor::ColorChoice::Auto,
            ColorChoice::Auto => termcolor::ColorChoice::Never,
        }
    }
}

/// patternlint CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "patternlint")]
#[command(about = "Scan files against pattern rules and fail on any match")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available patternlint subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan files and report every rule match
    Check {
        /// Files or directories to check (defaults to current directory)
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// JSON rules file (defaults to .patternlintrc)
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Only check files matching these globs
        #[arg(long)]
        include: Vec<String>,

        /// Skip files matching these globs
        #[arg(long)]
        exclude: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,

        /// Drop rules with invalid patterns instead of aborting
        #[arg(long)]
        skip_invalid_patterns: bool,
    },

    /// List the normalized rule set
    List {
        /// JSON rules file (defaults to .patternlintrc)
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_default_args() {
        let cli = Cli::parse_from(["patternlint", "check"]);
        match cli.command {
            Command::Check {
                paths,
                rules,
                include,
                exclude,
                format,
                skip_invalid_patterns,
            } => {
                assert_eq!(paths, vec![PathBuf::from(".")]);
                assert_eq!(rules, None);
                assert!(include.is_empty());
                assert!(exclude.is_empty());
                assert_eq!(format, OutputFormat::Human);
                assert!(!skip_invalid_patterns);
            }
            _ => panic!("Expected Check command"),
        }
        assert_eq!(cli.color, ColorChoice::Auto);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_check_with_paths_and_rules() {
        let cli = Cli::parse_from([
            "patternlint",
            "check",
            "src/",
            "test/",
            "--rules",
            "lint.json",
        ]);
        match cli.command {
            Command::Check { paths, rules, .. } => {
                assert_eq!(paths, vec![PathBuf::from("src/"), PathBuf::from("test/")]);
                assert_eq!(rules, Some(PathBuf::from("lint.json")));
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_check_with_globs() {
        let cli = Cli::parse_from([
            "patternlint",
            "check",
            "--include",
            "**/*.js",
            "--include",
            "**/*.css",
            "--exclude",
            "vendor/**",
        ]);
        match cli.command {
            Command::Check {
                include, exclude, ..
            } => {
                assert_eq!(include, vec!["**/*.js", "**/*.css"]);
                assert_eq!(exclude, vec!["vendor/**"]);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_check_short_format() {
        let cli = Cli::parse_from(["patternlint", "check", "-f", "jsonl"]);
        match cli.command {
            Command::Check { format, .. } => assert_eq!(format, OutputFormat::Jsonl),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_list_command() {
        let cli = Cli::parse_from(["patternlint", "list", "-r", "rules.json"]);
        match cli.command {
            Command::List { rules, format } => {
                assert_eq!(rules, Some(PathBuf::from("rules.json")));
                assert_eq!(format, OutputFormat::Human);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["patternlint", "check", "--color", "never", "-v"]);
        assert_eq!(cli.color, ColorChoice::Never);
        assert!(cli.verbose);
    }

    #[test]
    fn test_color_resolution() {
        assert_eq!(ColorChoice::Always.resolve(), termcolor::ColorChoice::Always);
        assert_eq!(ColorChoice::Never.resolve(), termcolor::ColorChoice::Never);
    }
}
