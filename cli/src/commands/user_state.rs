//! `berth-admin enable-user` / `disable-user`.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::application::ports::AdminTransport;
use crate::application::services::admin::AdminConsole;
use crate::output::OutputContext;

/// Arguments shared by commands that act on a single user.
#[derive(Args, Debug)]
pub struct UserIdArgs {
    /// Key id of the user
    #[arg(long)]
    pub id: String,
}

/// Enable (`enabled = true`) or disable a user.
pub fn run<T: AdminTransport>(
    ctx: &OutputContext,
    console: &AdminConsole<T>,
    args: &UserIdArgs,
    enabled: bool,
) -> Result<ExitCode> {
    let verb = if enabled { "enable" } else { "disable" };
    if !console.enable_user(&args.id, enabled) {
        anyhow::bail!("Failed to {verb} user {}", args.id);
    }
    ctx.success(&format!("User {} {verb}d", args.id));
    Ok(ExitCode::SUCCESS)
}
