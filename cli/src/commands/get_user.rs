//! `berth-admin get-user`: print one user's record.

use std::process::ExitCode;

use anyhow::Result;

use crate::application::ports::AdminTransport;
use crate::application::services::admin::AdminConsole;
use crate::commands::is_placeholder;
use crate::commands::user_state::UserIdArgs;
use crate::output::OutputContext;

/// Run the get-user command.
pub fn run<T: AdminTransport>(
    ctx: &OutputContext,
    console: &AdminConsole<T>,
    args: &UserIdArgs,
) -> Result<ExitCode> {
    let record = console.get_user(&args.id);
    if is_placeholder(&record) {
        anyhow::bail!("User {} not found or scheduler unavailable", args.id);
    }
    ctx.record(&record);
    Ok(ExitCode::SUCCESS)
}
