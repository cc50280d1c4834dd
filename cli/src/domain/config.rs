//! Domain types and validators for the admin config file.
//!
//! Pure functions only. No I/O, no filesystem access.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// ── Config schema ────────────────────────────────────────────────────────────

/// Admin tool configuration, stored in `~/.berth/admin.yaml` by default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Base URL of the scheduler's management endpoint.
    pub endpoint: String,

    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl AdminConfig {
    /// Check the endpoint scheme and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] for a non-http(s) endpoint
    /// and [`ConfigError::InvalidTimeout`] for a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.endpoint.trim();
        let has_host = ["http://", "https://"]
            .iter()
            .any(|scheme| endpoint.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
        if !has_host {
            return Err(ConfigError::InvalidEndpoint(self.endpoint.clone()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Endpoint with any trailing slash removed.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.endpoint.trim().trim_end_matches('/')
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
