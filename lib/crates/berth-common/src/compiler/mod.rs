//! Launch-specification compiler.
//!
//! Turns an application snapshot, a job and the ports the cluster assigned
//! to it into a [`LaunchDescriptor`]. Pure: no I/O, no shared state.

mod container;
mod process;

pub use container::container_config;
pub use process::{expand_ports, process_config};

use crate::config::SchedulerDefaults;
use crate::launch::LaunchDescriptor;
use crate::types::{Application, Job, PortRange};

/// Compile one job dispatch into its launch descriptor.
#[must_use]
pub fn compile(
    app: &Application,
    job: &Job,
    ranges: &[PortRange],
    fallback_user: &str,
) -> LaunchDescriptor {
    let descriptor = LaunchDescriptor {
        container_config: container_config(app),
        process_config: process_config(app, job, ranges, fallback_user),
    };
    tracing::debug!(
        app = %app.name,
        fetch = descriptor.process_config.fetch.len(),
        env = descriptor.process_config.env.len(),
        "compiled launch descriptor"
    );
    descriptor
}

/// Compiler bound to the scheduler's defaults.
#[derive(Debug, Clone, Default)]
pub struct LaunchCompiler {
    defaults: SchedulerDefaults,
}

impl LaunchCompiler {
    #[must_use]
    pub fn new(defaults: SchedulerDefaults) -> Self {
        Self { defaults }
    }

    #[must_use]
    pub fn defaults(&self) -> &SchedulerDefaults {
        &self.defaults
    }

    #[must_use]
    pub fn compile(&self, app: &Application, job: &Job, ranges: &[PortRange]) -> LaunchDescriptor {
        compile(app, job, ranges, &self.defaults.default_user)
    }
}
