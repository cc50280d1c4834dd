//! Command implementations

pub mod create_user;
pub mod create_users;
pub mod gc;
pub mod get_user;
pub mod help;
pub mod list_user;
pub mod usage;
pub mod user_state;

use crate::application::services::admin::EMPTY_RECORD;

/// One row of the subcommand table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubcommandInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Every subcommand the tool accepts, in the order help lists them.
pub const SUBCOMMANDS: &[SubcommandInfo] = &[
    SubcommandInfo {
        name: "create-user",
        description: "Create a user and print its record",
    },
    SubcommandInfo {
        name: "create-users",
        description: "Create one user per line of a descriptor file",
    },
    SubcommandInfo {
        name: "disable-user",
        description: "Disable a user",
    },
    SubcommandInfo {
        name: "enable-user",
        description: "Enable a user",
    },
    SubcommandInfo {
        name: "gc",
        description: "Garbage-collect finished jobs",
    },
    SubcommandInfo {
        name: "get-user",
        description: "Print a user's record",
    },
    SubcommandInfo {
        name: "help",
        description: "List subcommands",
    },
    SubcommandInfo {
        name: "list-user",
        description: "Print every user record",
    },
    SubcommandInfo {
        name: "usage",
        description: "Print usage records for a time window",
    },
];

/// `true` when a record is the failure placeholder rather than real data.
pub(crate) fn is_placeholder(record: &str) -> bool {
    record.trim() == EMPTY_RECORD
}
