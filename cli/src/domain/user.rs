//! Admin records: users and usage windows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::error::UsageError;

/// A user account as recorded by the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub key_id: String,
    #[serde(default)]
    pub secret: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

/// Closed interval of time to report usage over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl UsageWindow {
    /// Parse two RFC 3339 timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::InvalidTimestamp`] if either value does not
    /// parse, or [`UsageError::InvalidRange`] if `start` is after `end`.
    pub fn parse(start: &str, end: &str) -> Result<Self, UsageError> {
        let start_at = parse_timestamp(start)?;
        let end_at = parse_timestamp(end)?;
        if start_at > end_at {
            return Err(UsageError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self {
            start: start_at,
            end: end_at,
        })
    }

    /// Wire form of the window bounds.
    #[must_use]
    pub fn to_args(&self) -> (String, String) {
        (self.start.to_rfc3339(), self.end.to_rfc3339())
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, UsageError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|source| UsageError::InvalidTimestamp {
            value: value.to_string(),
            source,
        })
}
