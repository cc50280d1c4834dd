//! Unit tests for berth-admin
//!
//! These tests use mocked transports and run fast without network I/O.

mod architecture;
mod mocks;
