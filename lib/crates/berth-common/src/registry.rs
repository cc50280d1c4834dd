//! Application registry: the store port, an in-memory implementation and
//! the read facade the scheduler uses.
//!
//! Deletion is two-phase. [`ApplicationRegistry::soft_delete`] hides an
//! application from reads and marks it pending; its volumes are released
//! later by [`ApplicationRegistry::reclaim_pending`].

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::compiler::LaunchCompiler;
use crate::launch::LaunchDescriptor;
use crate::logging::warn_chain;
use crate::types::{Application, Job, PortRange};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("application '{0}' not found")]
    NotFound(String),
    #[error("application '{0}' already exists")]
    AlreadyExists(String),
    #[error("application registry unavailable: {0}")]
    Unavailable(String),
}

/// Where an application is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Active,
    /// Hidden from reads; backing volumes not yet reclaimed.
    PendingDeletion { since: DateTime<Utc> },
}

/// Store of registered applications.
///
/// Reads may run concurrently. Implementations serialize writes themselves.
pub trait ApplicationRegistry: Send + Sync {
    /// Active application by name.
    fn get(&self, name: &str) -> Result<Option<Application>, RegistryError>;

    /// Active applications ordered by name, optionally only those owned by
    /// `owner`.
    fn list(&self, owner: Option<&str>) -> Result<Vec<Application>, RegistryError>;

    /// Add a new application. Fails if the name is taken, including by one
    /// still pending deletion.
    fn register(&self, app: Application) -> Result<(), RegistryError>;

    /// Hide an active application and mark it for reclamation.
    fn soft_delete(&self, name: &str) -> Result<(), RegistryError>;

    /// Drop every application that has been pending for at least `leeway`.
    /// Returns the reclaimed names.
    fn reclaim_pending(&self, leeway: Duration) -> Result<Vec<String>, RegistryError>;

    fn lifecycle(&self, name: &str) -> Result<Option<Lifecycle>, RegistryError>;
}

// ── In-memory store ──────────────────────────────────────────────────────────

#[derive(Debug)]
struct Entry {
    app: Application,
    lifecycle: Lifecycle,
}

#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    entries: RwLock<BTreeMap<String, Entry>>,
}

impl InMemoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned<T>(_: T) -> RegistryError {
        RegistryError::Unavailable("lock poisoned".to_string())
    }
}

impl ApplicationRegistry for InMemoryRegistry {
    fn get(&self, name: &str) -> Result<Option<Application>, RegistryError> {
        let entries = self.entries.read().map_err(Self::poisoned)?;
        Ok(entries
            .get(name)
            .filter(|e| e.lifecycle == Lifecycle::Active)
            .map(|e| e.app.clone()))
    }

    fn list(&self, owner: Option<&str>) -> Result<Vec<Application>, RegistryError> {
        let entries = self.entries.read().map_err(Self::poisoned)?;
        Ok(entries
            .values()
            .filter(|e| e.lifecycle == Lifecycle::Active)
            .filter(|e| owner.is_none_or(|o| e.app.owner.as_deref() == Some(o)))
            .map(|e| e.app.clone())
            .collect())
    }

    fn register(&self, app: Application) -> Result<(), RegistryError> {
        let mut entries = self.entries.write().map_err(Self::poisoned)?;
        if entries.contains_key(&app.name) {
            return Err(RegistryError::AlreadyExists(app.name));
        }
        tracing::info!(app = %app.name, "registered application");
        entries.insert(
            app.name.clone(),
            Entry {
                app,
                lifecycle: Lifecycle::Active,
            },
        );
        Ok(())
    }

    fn soft_delete(&self, name: &str) -> Result<(), RegistryError> {
        let mut entries = self.entries.write().map_err(Self::poisoned)?;
        match entries.get_mut(name) {
            Some(entry) if entry.lifecycle == Lifecycle::Active => {
                entry.lifecycle = Lifecycle::PendingDeletion { since: Utc::now() };
                tracing::info!(app = %name, "application marked for deletion");
                Ok(())
            }
            _ => Err(RegistryError::NotFound(name.to_string())),
        }
    }

    fn reclaim_pending(&self, leeway: Duration) -> Result<Vec<String>, RegistryError> {
        let mut entries = self.entries.write().map_err(Self::poisoned)?;
        // A leeway reaching past the representable past leaves nothing due.
        let Some(cutoff) = Utc::now().checked_sub_signed(leeway) else {
            return Ok(Vec::new());
        };
        let due: Vec<String> = entries
            .iter()
            .filter_map(|(name, e)| match e.lifecycle {
                Lifecycle::PendingDeletion { since } if since <= cutoff => Some(name.clone()),
                _ => None,
            })
            .collect();
        for name in &due {
            entries.remove(name);
        }
        if !due.is_empty() {
            tracing::info!(count = due.len(), "reclaimed deleted applications");
        }
        Ok(due)
    }

    fn lifecycle(&self, name: &str) -> Result<Option<Lifecycle>, RegistryError> {
        let entries = self.entries.read().map_err(Self::poisoned)?;
        Ok(entries.get(name).map(|e| e.lifecycle))
    }
}

// ── Read facade ──────────────────────────────────────────────────────────────

/// Scheduler-side view of the registry.
///
/// Reads never fail: a store error is logged and reported as absent/empty.
pub struct Applications<R: ApplicationRegistry> {
    registry: R,
}

impl<R: ApplicationRegistry> Applications<R> {
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn get(&self, name: &str) -> Option<Application> {
        match self.registry.get(name) {
            Ok(app) => app,
            Err(e) => {
                warn_chain(&format!("could not fetch application {name}"), &e);
                None
            }
        }
    }

    pub fn get_all(&self) -> Vec<Application> {
        self.list(None)
    }

    /// Applications registered by `owner`.
    pub fn get_all_owned(&self, owner: &str) -> Vec<Application> {
        self.list(Some(owner))
    }

    fn list(&self, owner: Option<&str>) -> Vec<Application> {
        self.registry.list(owner).unwrap_or_else(|e| {
            warn_chain("could not list applications", &e);
            Vec::new()
        })
    }

    pub fn load(&self, app: Application) -> Result<(), RegistryError> {
        self.registry.register(app)
    }

    /// Soft-delete `name`. Volumes are reclaimed lazily by
    /// [`ApplicationRegistry::reclaim_pending`].
    #[deprecated(note = "volumes are reclaimed lazily; use ApplicationRegistry::soft_delete")]
    pub fn unload(&self, name: &str) -> Result<(), RegistryError> {
        self.registry.soft_delete(name)
    }

    /// Compile `job` against a single snapshot of its application.
    pub fn launch(
        &self,
        compiler: &LaunchCompiler,
        job: &Job,
        ranges: &[PortRange],
    ) -> Option<LaunchDescriptor> {
        let app = self.get(&job.app)?;
        Some(compiler.compile(&app, job, ranges))
    }
}
