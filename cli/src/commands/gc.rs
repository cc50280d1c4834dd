//! `berth-admin gc`: garbage-collect finished jobs.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::application::ports::AdminTransport;
use crate::application::services::admin::AdminConsole;
use crate::output::OutputContext;

/// Arguments for the gc command.
#[derive(Args, Debug)]
pub struct GcArgs {
    /// Only collect jobs finished more than this many seconds ago
    #[arg(long, value_name = "SECONDS")]
    pub leeway: Option<u32>,
}

/// Run the gc command.
pub fn run<T: AdminTransport>(
    ctx: &OutputContext,
    console: &AdminConsole<T>,
    args: &GcArgs,
) -> Result<ExitCode> {
    let done = match args.leeway {
        Some(leeway) => console.gc_with_leeway(leeway),
        None => console.gc(),
    };
    if !done {
        anyhow::bail!("Garbage collection failed (is the scheduler reachable?)");
    }
    ctx.success("Garbage collection finished");
    Ok(ExitCode::SUCCESS)
}
