use serde::Deserialize;

/// Scheduler-wide defaults the compiler falls back on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SchedulerDefaults {
    /// Execution identity for applications that do not declare one
    /// (default: nobody)
    #[serde(default = "default_user")]
    pub default_user: String,
}

fn default_user() -> String {
    "nobody".to_string()
}

impl Default for SchedulerDefaults {
    fn default() -> Self {
        Self {
            default_user: default_user(),
        }
    }
}
