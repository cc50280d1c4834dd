//! berth-admin - remote administration for the berth job queue

#![cfg_attr(test, allow(clippy::expect_used))]

use std::process::ExitCode;

use berth_admin::cli::{Cli, FAILURE_STATUS};
use berth_admin::commands::{self, SUBCOMMANDS};
use berth_admin::output::{OutputContext, Styles};
use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e),
    };

    init_tracing(cli.verbose, cli.no_color);
    let output = OutputContext::new(cli.no_color);

    match cli.run(SUBCOMMANDS) {
        Ok(code) => code,
        Err(e) => {
            output.error(&format!("{e:#}"));
            ExitCode::from(FAILURE_STATUS)
        }
    }
}

/// `--help` and `--version` exit cleanly; anything else lists the
/// subcommands and fails.
fn report_parse_error(e: &clap::Error) -> ExitCode {
    let _ = e.print();
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => {
            eprint!("\n{}", commands::help::render(SUBCOMMANDS, &Styles::default()));
            ExitCode::from(FAILURE_STATUS)
        }
    }
}

/// Logs go to stderr so records on stdout stay parseable. `RUST_LOG`
/// overrides the level.
fn init_tracing(verbose: bool, no_color: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .init();
}
