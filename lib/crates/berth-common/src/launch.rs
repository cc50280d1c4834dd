//! Orchestrator-facing launch descriptor.
//!
//! These are the wire types handed to the orchestrator submission path.
//! Field names and enum spellings are part of the contract.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Compiled container and process specification for one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_config: Option<ContainerConfig>,
    pub process_config: ProcessConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerConfig {
    pub runtime_type: RuntimeType,
    pub image: ImageRef,
    #[serde(default)]
    pub volumes: Vec<VolumeConfig>,
}

/// Execution mode on the agent. Docker images always run under the
/// orchestrator's own containerizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeType {
    Native,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub format: ImageFormat,
    pub reference: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Docker,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeConfig {
    pub container_path: String,
    pub volume_name: String,
    pub driver: String,
    pub mode: AccessMode,
    /// Absent when the source volume declared no options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_options: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessMode {
    #[serde(rename = "RW")]
    Rw,
    #[serde(rename = "RO")]
    Ro,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessConfig {
    pub user: String,
    pub fetch: Vec<FetchSpec>,
    pub env: Vec<EnvVar>,
    pub command_line: String,
    pub shell: bool,
}

/// One artifact the agent downloads before starting the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchSpec {
    pub uri: String,
    pub cached: bool,
}

impl FetchSpec {
    #[must_use]
    pub fn new(uri: impl Into<String>, cached: bool) -> Self {
        Self {
            uri: uri.into(),
            cached,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

impl EnvVar {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
