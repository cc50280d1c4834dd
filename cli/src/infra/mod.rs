//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module holds the I/O-performing code: config file access and the
//! HTTP admin transport.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod config;
pub mod http_transport;

pub use config::{YamlConfigStore, default_config_path};
pub use http_transport::HttpAdminTransport;
