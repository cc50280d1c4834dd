//! `berth-admin list-user`: print every user record.

use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::application::ports::AdminTransport;
use crate::application::services::admin::AdminConsole;
use crate::output::OutputContext;

/// Run the list-user command. An unreachable endpoint is an error, not an
/// empty listing.
pub fn run<T: AdminTransport>(ctx: &OutputContext, console: &AdminConsole<T>) -> Result<ExitCode> {
    let records = console.service().list_user().context("Failed to list users")?;
    for record in records {
        ctx.record(&record);
    }
    Ok(ExitCode::SUCCESS)
}
