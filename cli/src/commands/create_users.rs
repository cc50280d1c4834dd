//! `berth-admin create-users`: create users in bulk from a file.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use crate::application::ports::AdminTransport;
use crate::application::services::admin::AdminConsole;
use crate::commands::is_placeholder;
use crate::output::OutputContext;

/// Arguments for the create-users command.
#[derive(Args, Debug)]
pub struct CreateUsersArgs {
    /// File with one user descriptor per line
    #[arg(long)]
    pub file: PathBuf,
}

/// Non-empty, trimmed lines of `content`.
#[must_use]
pub fn descriptors(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn read_descriptors(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

/// Run the create-users command.
///
/// Every descriptor is attempted even after a failure.
pub fn run<T: AdminTransport>(
    ctx: &OutputContext,
    console: &AdminConsole<T>,
    args: &CreateUsersArgs,
) -> Result<ExitCode> {
    let content = read_descriptors(&args.file)?;
    let lines = descriptors(&content);
    if lines.is_empty() {
        ctx.warn(&format!("No user descriptors in {}", args.file.display()));
        return Ok(ExitCode::SUCCESS);
    }

    let mut failed = 0usize;
    for info in &lines {
        let record = console.create_user(info);
        if is_placeholder(&record) {
            failed += 1;
            tracing::warn!(descriptor = %info, "user creation failed");
        } else {
            ctx.record(&record);
        }
    }

    if failed > 0 {
        anyhow::bail!("Failed to create {failed} of {} users", lines.len());
    }
    Ok(ExitCode::SUCCESS)
}
