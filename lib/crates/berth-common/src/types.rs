use std::collections::BTreeMap;
use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

// ── Port ranges ──────────────────────────────────────────────────────────────

/// Returned when a port range is built or decoded with `min > max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid port range: min {min} is greater than max {max}")]
pub struct InvalidRange {
    pub min: u64,
    pub max: u64,
}

/// Inclusive interval of cluster-assigned ports.
///
/// Fields are private: the only ways in are [`PortRange::new`] and serde,
/// and both reject `min > max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPortRange")]
pub struct PortRange {
    min: u64,
    max: u64,
}

#[derive(Deserialize)]
struct RawPortRange {
    min: u64,
    max: u64,
}

impl TryFrom<RawPortRange> for PortRange {
    type Error = InvalidRange;

    fn try_from(raw: RawPortRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl PortRange {
    /// Build a range covering `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRange`] if `min > max`.
    pub fn new(min: u64, max: u64) -> Result<Self, InvalidRange> {
        if min > max {
            return Err(InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// A range holding exactly one port.
    #[must_use]
    pub fn single(port: u64) -> Self {
        Self {
            min: port,
            max: port,
        }
    }

    #[must_use]
    pub fn min(&self) -> u64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> u64 {
        self.max
    }

    /// Number of ports in the range (never zero).
    #[must_use]
    pub fn port_count(&self) -> u64 {
        self.max - self.min + 1
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{}]", self.min, self.max)
    }
}

// ── Applications ─────────────────────────────────────────────────────────────

/// A registered deployment unit that jobs run under.
///
/// Read-only once registered; the registry hands out clones as snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub name: String,
    /// Id of the user that registered the application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// Locators fetched without caching on every launch.
    #[serde(default)]
    pub files: Vec<String>,
    /// Locators fetched with the agent-side cache enabled.
    #[serde(default)]
    pub large_files: Vec<String>,
    /// Paths that survive across runs.
    #[serde(default)]
    pub persistent_files: Vec<String>,
    #[serde(default, rename = "diskMB")]
    pub disk_mb: u64,
    /// Execution identity override; the scheduler default applies when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default)]
    pub container: Container,
}

impl Application {
    /// An application with no artifacts, no quota and no container.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: None,
            files: Vec::new(),
            large_files: Vec::new(),
            persistent_files: Vec::new(),
            disk_mb: 0,
            user: None,
            container: Container::None,
        }
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Application {}: fetch: {} / {} / persistent ({} MB): {}",
            self.name,
            self.files.join(" "),
            self.large_files.join(" "),
            self.disk_mb,
            self.persistent_files.join(" "),
        )
    }
}

/// Container runtime an application asks for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Container {
    /// Run directly on the agent, no image.
    #[default]
    None,
    Docker(DockerContainer),
}

/// Docker image reference plus the volumes to mount into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerContainer {
    pub image: String,
    #[serde(default)]
    pub volumes: Vec<Volume>,
}

/// A driver-backed volume mounted into the container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    /// Absolute mount target inside the container.
    pub container_path: String,
    /// Backing volume id, e.g. an NFS export.
    pub name: String,
    /// Volume driver, e.g. `nfs`.
    pub driver: String,
    #[serde(default)]
    pub options: BTreeMap<String, String>,
    #[serde(default)]
    pub mode: VolumeMode,
}

/// Volume access mode. Anything not recognisably read-write is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VolumeMode {
    ReadWrite,
    #[default]
    ReadOnly,
}

impl VolumeMode {
    /// Lenient parse; unknown names fall back to [`VolumeMode::ReadOnly`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        if ["rw", "readwrite", "read_write", "read-write"]
            .iter()
            .any(|known| name.eq_ignore_ascii_case(known))
        {
            Self::ReadWrite
        } else {
            Self::ReadOnly
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReadWrite => "RW",
            Self::ReadOnly => "RO",
        }
    }
}

impl Serialize for VolumeMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VolumeMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawMode {
            Name(String),
            Other(IgnoredAny),
        }

        Ok(match RawMode::deserialize(deserializer)? {
            RawMode::Name(name) => Self::from_name(&name),
            RawMode::Other(_) => Self::ReadOnly,
        })
    }
}

// ── Jobs ─────────────────────────────────────────────────────────────────────

/// Ordered job properties, exported to the process as its environment.
///
/// Kept as a list so declaration order survives; duplicate names are kept
/// as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobProperties(Vec<(String, String)>);

impl JobProperties {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for JobProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl Serialize for JobProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

impl<'de> Deserialize<'de> for JobProperties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PropertiesVisitor;

        impl<'de> Visitor<'de> for PropertiesVisitor {
            type Value = JobProperties;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of string properties")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut props = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((k, v)) = map.next_entry::<String, String>()? {
                    props.push((k, v));
                }
                Ok(JobProperties(props))
            }
        }

        deserializer.deserialize_map(PropertiesVisitor)
    }
}

/// One unit of work submitted under an application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Name of the owning application; looked up, not owned.
    pub app: String,
    pub command: String,
    #[serde(default)]
    pub properties: JobProperties,
}

impl Job {
    #[must_use]
    pub fn new(app: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            command: command.into(),
            properties: JobProperties::new(),
        }
    }

    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(name, value);
        self
    }
}
