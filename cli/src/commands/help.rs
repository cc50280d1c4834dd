//! `berth-admin help`: list subcommands.

use std::fmt::Write as _;
use std::process::ExitCode;

use anyhow::Result;
use owo_colors::OwoColorize as _;

use crate::commands::SubcommandInfo;
use crate::output::{OutputContext, Styles};

/// Render the subcommand table, one `name  description` row per line.
#[must_use]
pub fn render(table: &[SubcommandInfo], styles: &Styles) -> String {
    let width = table.iter().map(|s| s.name.len()).max().unwrap_or(0);
    let mut out = String::from("Subcommands:\n");
    for sub in table {
        let padded = format!("{:<width$}", sub.name);
        // Writing to a String cannot fail.
        let _ = writeln!(out, "  {}  {}", padded.style(styles.command), sub.description);
    }
    out
}

/// Print the table to stdout.
pub fn run(ctx: &OutputContext, table: &[SubcommandInfo]) -> Result<ExitCode> {
    print!("{}", render(table, &ctx.styles));
    Ok(ExitCode::SUCCESS)
}
