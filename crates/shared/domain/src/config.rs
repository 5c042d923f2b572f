use crate::constants::TAB_VULNERABILITIES;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level dashboard configuration shared across the shell and slices.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfigInner {
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(flatten, default)]
    inner: Arc<DashboardConfigInner>,
}

impl Deref for DashboardConfig {
    type Target = DashboardConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for DashboardConfig {
    fn deref_mut(&mut self) -> &mut DashboardConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Initial session state: which nodes start expanded and which tab is active.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub expanded: Vec<String>,
    pub active_tab: String,
}

/// Console/file logging knobs consumed by the application shell.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub console: bool,
    pub path: Option<PathBuf>,
    pub level: String,
}

// --- Default ---

impl Default for SessionConfig {
    fn default() -> Self {
        Self { expanded: vec!["proj-1".to_owned()], active_tab: TAB_VULNERABILITIES.to_owned() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { console: true, path: None, level: "info".to_owned() }
    }
}
