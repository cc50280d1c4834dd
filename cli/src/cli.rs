//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::application::ports::AdminTransport;
use crate::application::services::admin::AdminConsole;
use crate::commands::{self, SubcommandInfo};
use crate::output::OutputContext;

/// Exit status for configuration, transport, and parse failures (-1 as a byte).
pub const FAILURE_STATUS: u8 = 255;

/// Remote administration for the berth job queue
#[derive(Parser, Debug)]
#[command(
    name = "berth-admin",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Admin config file [default: ~/.berth/admin.yaml]
    #[arg(short = 'C', long = "config", global = true, env = "BERTH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log the parsed command and endpoint, and enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a user and print its record
    CreateUser(commands::create_user::CreateUserArgs),

    /// Create one user per line of a descriptor file
    CreateUsers(commands::create_users::CreateUsersArgs),

    /// Disable a user
    DisableUser(commands::user_state::UserIdArgs),

    /// Enable a user
    EnableUser(commands::user_state::UserIdArgs),

    /// Garbage-collect finished jobs
    Gc(commands::gc::GcArgs),

    /// Print a user's record
    GetUser(commands::user_state::UserIdArgs),

    /// List subcommands
    Help,

    /// Print every user record
    ListUser,

    /// Print usage records for a time window
    Usage(commands::usage::UsageArgs),
}

impl Command {
    /// Subcommand name as typed on the command line.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateUser(_) => "create-user",
            Self::CreateUsers(_) => "create-users",
            Self::DisableUser(_) => "disable-user",
            Self::EnableUser(_) => "enable-user",
            Self::Gc(_) => "gc",
            Self::GetUser(_) => "get-user",
            Self::Help => "help",
            Self::ListUser => "list-user",
            Self::Usage(_) => "usage",
        }
    }
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// `help` prints `table` without touching the config. Every other
    /// command loads and validates the config before its first request.
    ///
    /// # Errors
    ///
    /// Returns an error on a config problem or when the command fails.
    pub fn run(self, table: &[SubcommandInfo]) -> Result<ExitCode> {
        let Cli {
            config,
            verbose,
            no_color,
            command,
        } = self;
        let app = AppContext::new(&AppFlags {
            config,
            verbose,
            no_color,
        });

        if let Command::Help = command {
            return commands::help::run(&app.output, table);
        }

        if app.verbose {
            tracing::info!(
                command = command.name(),
                config = %app.config_path().display(),
                "parsed command"
            );
        }
        let console = app.admin_console()?;
        dispatch(command, &app.output, &console, table)
    }
}

/// Route a parsed command to its handler.
///
/// # Errors
///
/// Returns an error when the handler fails.
pub fn dispatch<T: AdminTransport>(
    command: Command,
    ctx: &OutputContext,
    console: &AdminConsole<T>,
    table: &[SubcommandInfo],
) -> Result<ExitCode> {
    match command {
        Command::CreateUser(args) => commands::create_user::run(ctx, console, &args),
        Command::CreateUsers(args) => commands::create_users::run(ctx, console, &args),
        Command::DisableUser(args) => commands::user_state::run(ctx, console, &args, false),
        Command::EnableUser(args) => commands::user_state::run(ctx, console, &args, true),
        Command::Gc(args) => commands::gc::run(ctx, console, &args),
        Command::GetUser(args) => commands::get_user::run(ctx, console, &args),
        Command::Help => commands::help::run(ctx, table),
        Command::ListUser => commands::list_user::run(ctx, console),
        Command::Usage(args) => commands::usage::run(ctx, console, &args),
    }
}
