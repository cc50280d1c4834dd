//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, or `std::net`. All error types implement
//! `thiserror::Error` and convert to `anyhow::Error` via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors loading or validating the admin config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}\n\nCreate it with an `endpoint:` entry or pass --config <PATH>.", .0.display())]
    Missing(PathBuf),

    #[error("Cannot read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid endpoint '{0}': must be an http:// or https:// URL")]
    InvalidEndpoint(String),

    #[error("Invalid timeout_secs: must be greater than zero")]
    InvalidTimeout,
}

// ── Usage window errors ───────────────────────────────────────────────────────

/// Errors parsing the `usage` time window.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("Invalid timestamp '{value}': expected RFC 3339, e.g. 2024-01-31T00:00:00Z")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid usage window: start {start} is after end {end}")]
    InvalidRange { start: String, end: String },
}

// ── Admin transport errors ────────────────────────────────────────────────────

/// Failure moving a request to or from the management endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("cannot connect to admin endpoint: {0}")]
    Connect(String),

    #[error("admin endpoint timed out")]
    Timeout,

    #[error("admin endpoint returned HTTP {0}")]
    Status(u16),

    #[error("I/O error talking to admin endpoint: {0}")]
    Io(String),

    #[error("malformed admin response: {0}")]
    Protocol(String),
}

/// Failure of one admin operation.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("cannot decode admin record")]
    Decode(#[from] serde_json::Error),

    #[error("{operation} returned an unexpected result (expected {expected})")]
    UnexpectedResult {
        operation: &'static str,
        expected: &'static str,
    },
}
