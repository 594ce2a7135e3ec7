//! patternlint CLI entry point

use clap::Parser;
use patternlint::cli::{CheckOptions, Command, args::Cli};
use std::process;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "patternlint=debug" } else { "patternlint=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match cli.command {
        Command::Check {
            paths,
            rules,
            include,
            exclude,
            format,
            skip_invalid_patterns,
        } => patternlint::cli::check::run_check(CheckOptions {
            paths,
            rules,
            include,
            exclude,
            format,
            skip_invalid_patterns,
            color: cli.color,
        }),
        Command::List { rules, format } => patternlint::cli::list::run_list(rules, format),
    };

    process::exit(exit_code);
}
