//! Application service: remote administration use-cases.
//!
//! [`AdminService`] speaks the management protocol and reports every
//! failure as a typed [`AdminError`]. [`AdminConsole`] wraps it and turns
//! each failure into the operation's "unavailable" value after logging it.

use anyhow::Context as _;
use berth_common::logging::{error_chain, warn_chain};
use serde_json::{Value, json};

use crate::application::ports::AdminTransport;
use crate::domain::{AdminError, User};

/// Record returned by `create_user` / `get_user` when the call fails.
pub const EMPTY_RECORD: &str = "{}";

// ── Typed service ─────────────────────────────────────────────────────────────

/// Management operations with explicit errors.
pub struct AdminService<T: AdminTransport> {
    transport: T,
}

impl<T: AdminTransport> AdminService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Enable or disable the user with key `id`.
    pub fn enable_user(&self, id: &str, enabled: bool) -> Result<bool, AdminError> {
        let value = self.transport.invoke("enableUser", &[json!(id), json!(enabled)])?;
        expect_bool("enableUser", &value)
    }

    /// Usage records between two RFC 3339 timestamps.
    pub fn get_usage(&self, start: &str, end: &str) -> Result<Vec<String>, AdminError> {
        let value = self.transport.invoke("getUsage", &[json!(start), json!(end)])?;
        expect_records("getUsage", value)
    }

    pub fn list_user(&self) -> Result<Vec<String>, AdminError> {
        let value = self.transport.invoke("listUser", &[])?;
        expect_records("listUser", value)
    }

    /// Create a user from an opaque descriptor and return its record.
    pub fn create_user(&self, info: &str) -> Result<String, AdminError> {
        let value = self.transport.invoke("createUser", &[json!(info)])?;
        expect_record("createUser", value)
    }

    pub fn get_user(&self, key_id: &str) -> Result<String, AdminError> {
        let value = self.transport.invoke("getUser", &[json!(key_id)])?;
        expect_record("getUser", value)
    }

    /// Ask the scheduler to collect finished jobs with its own leeway.
    pub fn gc(&self) -> Result<bool, AdminError> {
        let value = self.transport.invoke("gc", &[])?;
        expect_bool("gc", &value)
    }

    /// Collect finished jobs older than `leeway` seconds.
    pub fn gc_with_leeway(&self, leeway: u32) -> Result<bool, AdminError> {
        let value = self.transport.invoke("gc", &[json!(leeway)])?;
        expect_bool("gc", &value)
    }
}

fn expect_bool(operation: &'static str, value: &Value) -> Result<bool, AdminError> {
    value.as_bool().ok_or(AdminError::UnexpectedResult {
        operation,
        expected: "boolean",
    })
}

fn expect_record(operation: &'static str, value: Value) -> Result<String, AdminError> {
    match value {
        Value::String(record) => Ok(record),
        _ => Err(AdminError::UnexpectedResult {
            operation,
            expected: "string record",
        }),
    }
}

fn expect_records(operation: &'static str, value: Value) -> Result<Vec<String>, AdminError> {
    let Value::Array(items) = value else {
        return Err(AdminError::UnexpectedResult {
            operation,
            expected: "list of string records",
        });
    };
    items
        .into_iter()
        .map(|item| expect_record(operation, item))
        .collect::<Result<_, _>>()
        .map_err(|_| AdminError::UnexpectedResult {
            operation,
            expected: "list of string records",
        })
}

// ── Sentinel console ──────────────────────────────────────────────────────────

/// Outermost admin client: every operation always yields a value.
///
/// Failures come back as `false`, an empty list, or [`EMPTY_RECORD`].
pub struct AdminConsole<T: AdminTransport> {
    service: AdminService<T>,
}

impl<T: AdminTransport> AdminConsole<T> {
    pub fn new(transport: T) -> Self {
        Self {
            service: AdminService::new(transport),
        }
    }

    pub fn service(&self) -> &AdminService<T> {
        &self.service
    }

    pub fn enable_user(&self, id: &str, enabled: bool) -> bool {
        self.service
            .enable_user(id, enabled)
            .unwrap_or_else(|e| degraded("enableUser", &e, false))
    }

    pub fn get_usage(&self, start: &str, end: &str) -> Vec<String> {
        self.service
            .get_usage(start, end)
            .unwrap_or_else(|e| degraded("getUsage", &e, Vec::new()))
    }

    pub fn list_user(&self) -> Vec<String> {
        self.service
            .list_user()
            .unwrap_or_else(|e| degraded("listUser", &e, Vec::new()))
    }

    pub fn create_user(&self, info: &str) -> String {
        self.service.create_user(info).unwrap_or_else(|e| {
            error_chain("createUser failed", &e);
            EMPTY_RECORD.to_string()
        })
    }

    pub fn get_user(&self, key_id: &str) -> String {
        self.service
            .get_user(key_id)
            .unwrap_or_else(|e| degraded("getUser", &e, EMPTY_RECORD.to_string()))
    }

    pub fn gc(&self) -> bool {
        self.service.gc().unwrap_or_else(|e| degraded("gc", &e, false))
    }

    pub fn gc_with_leeway(&self, leeway: u32) -> bool {
        self.service
            .gc_with_leeway(leeway)
            .unwrap_or_else(|e| degraded("gc", &e, false))
    }

    /// Create a user and parse the returned record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record (including the failure placeholder)
    /// is not a valid user.
    pub fn create_user_as_object(&self, info: &str) -> anyhow::Result<User> {
        parse_user(&self.create_user(info)).context("cannot parse created user record")
    }

    /// Fetch a user and parse the returned record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record (including the failure placeholder)
    /// is not a valid user.
    pub fn get_user_as_object(&self, key_id: &str) -> anyhow::Result<User> {
        parse_user(&self.get_user(key_id))
            .with_context(|| format!("cannot parse user record for {key_id}"))
    }
}

fn parse_user(record: &str) -> Result<User, AdminError> {
    Ok(serde_json::from_str(record)?)
}

fn degraded<V>(operation: &str, err: &AdminError, fallback: V) -> V {
    warn_chain(&format!("{operation} failed"), err);
    fallback
}
