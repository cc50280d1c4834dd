//! `berth-admin create-user`: create one user.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::application::ports::AdminTransport;
use crate::application::services::admin::AdminConsole;
use crate::commands::is_placeholder;
use crate::output::OutputContext;

/// Arguments for the create-user command.
#[derive(Args, Debug)]
pub struct CreateUserArgs {
    /// Free-form descriptor stored with the user
    #[arg(long)]
    pub info: Option<String>,
}

/// Run the create-user command.
pub fn run<T: AdminTransport>(
    ctx: &OutputContext,
    console: &AdminConsole<T>,
    args: &CreateUserArgs,
) -> Result<ExitCode> {
    let record = console.create_user(args.info.as_deref().unwrap_or_default());
    if is_placeholder(&record) {
        anyhow::bail!("Failed to create user (is the scheduler reachable?)");
    }
    ctx.record(&record);
    Ok(ExitCode::SUCCESS)
}
