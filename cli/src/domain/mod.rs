//! Domain layer: pure types and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod user;

pub use config::AdminConfig;
pub use error::{AdminError, ConfigError, TransportError, UsageError};
pub use user::{UsageWindow, User};
