//! Shared model and launch compiler for the berth job queue.

pub mod compiler;
pub mod config;
pub mod launch;
pub mod logging;
pub mod registry;
pub mod types;

pub use compiler::{LaunchCompiler, compile};
pub use config::SchedulerDefaults;
pub use launch::LaunchDescriptor;
pub use registry::{ApplicationRegistry, Applications, InMemoryRegistry, Lifecycle, RegistryError};
pub use types::*;
