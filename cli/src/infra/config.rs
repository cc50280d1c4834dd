//! Infrastructure implementation of the `ConfigStore` port.

use std::path::{Path, PathBuf};

use crate::application::ports::ConfigStore;
use crate::domain::{AdminConfig, ConfigError};

/// Default config location relative to the home directory.
const DEFAULT_RELATIVE_PATH: [&str; 2] = [".berth", "admin.yaml"];

/// `~/.berth/admin.yaml`, or the bare relative path when there is no home
/// directory.
#[must_use]
pub fn default_config_path() -> PathBuf {
    let relative: PathBuf = DEFAULT_RELATIVE_PATH.iter().collect();
    dirs::home_dir().map_or_else(|| relative.clone(), |home| home.join(&relative))
}

/// Production implementation of `ConfigStore` that reads a YAML file.
pub struct YamlConfigStore {
    path: PathBuf,
}

impl YamlConfigStore {
    /// Store reading `path`, or the default location when `None`.
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.unwrap_or_else(default_config_path),
        }
    }
}

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<AdminConfig, ConfigError> {
        let path = &self.path;
        if !path.exists() {
            return Err(ConfigError::Missing(path.clone()));
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config: AdminConfig =
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
