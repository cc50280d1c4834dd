//! `berth-admin usage`: print usage records for a time window.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use crate::application::ports::AdminTransport;
use crate::application::services::admin::AdminConsole;
use crate::domain::UsageWindow;
use crate::output::OutputContext;

/// Arguments for the usage command.
#[derive(Args, Debug)]
pub struct UsageArgs {
    /// Window start (RFC 3339, e.g. 2024-01-01T00:00:00Z)
    #[arg(long)]
    pub start: String,

    /// Window end (RFC 3339)
    #[arg(long)]
    pub end: String,
}

/// Run the usage command. The window is validated before any request, and a
/// failed request is an error rather than an empty report.
pub fn run<T: AdminTransport>(
    ctx: &OutputContext,
    console: &AdminConsole<T>,
    args: &UsageArgs,
) -> Result<ExitCode> {
    let window = UsageWindow::parse(&args.start, &args.end)?;
    let (start, end) = window.to_args();
    let records = console
        .service()
        .get_usage(&start, &end)
        .context("Failed to fetch usage records")?;
    for record in records {
        ctx.record(&record);
    }
    Ok(ExitCode::SUCCESS)
}
