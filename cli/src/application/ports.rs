//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces infrastructure must fulfill. This file imports
//! only from `crate::domain`, never from `crate::infra`, `crate::commands`,
//! or `crate::output`.

use std::path::Path;

use serde_json::Value;

use crate::domain::{AdminConfig, ConfigError, TransportError};

// ── Admin transport port ──────────────────────────────────────────────────────

/// One synchronous request/response against the management endpoint.
///
/// Implementations apply their own timeout and never retry.
pub trait AdminTransport {
    /// Invoke `operation` with positional `args` and return its result value.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the request cannot be delivered or
    /// the response cannot be read.
    fn invoke(&self, operation: &str, args: &[Value]) -> Result<Value, TransportError>;
}

impl<T: AdminTransport + ?Sized> AdminTransport for &T {
    fn invoke(&self, operation: &str, args: &[Value]) -> Result<Value, TransportError> {
        (**self).invoke(operation, args)
    }
}

// ── Config store port ─────────────────────────────────────────────────────────

/// Abstracts loading the admin config so commands can be tested without a
/// file on disk.
pub trait ConfigStore {
    /// Load and validate the config.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file is missing, unreadable,
    /// malformed, or fails validation.
    fn load(&self) -> Result<AdminConfig, ConfigError>;

    /// Location the config is read from.
    fn path(&self) -> &Path;
}
