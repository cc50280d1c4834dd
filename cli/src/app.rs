//! Application context: state shared by every command handler.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::application::services::admin::AdminConsole;
use crate::infra::{HttpAdminTransport, YamlConfigStore};
use crate::output::OutputContext;

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Explicit config path; the default location is used when `None`.
    pub config: Option<PathBuf>,
    /// Log the parsed command and endpoint.
    pub verbose: bool,
    /// Disable ANSI color output.
    pub no_color: bool,
}

/// Unified application context passed to command handlers.
pub struct AppContext {
    /// Terminal output context.
    pub output: OutputContext,
    /// Admin config source.
    pub config_store: YamlConfigStore,
    pub verbose: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(flags: &AppFlags) -> Self {
        Self {
            output: OutputContext::new(flags.no_color),
            config_store: YamlConfigStore::new(flags.config.clone()),
            verbose: flags.verbose,
        }
    }

    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_store.path()
    }

    /// Load the config and connect an admin console to its endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be loaded or is invalid.
    pub fn admin_console(&self) -> Result<AdminConsole<HttpAdminTransport>> {
        let config = self.config_store.load()?;
        if self.verbose {
            tracing::info!(
                endpoint = %config.base_url(),
                timeout_secs = config.timeout_secs,
                "using admin endpoint"
            );
        }
        Ok(AdminConsole::new(HttpAdminTransport::new(&config)))
    }
}
