use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::PathBuf,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::patterns::PatternConfig;
use crate::log_warn;

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplaySettings {
    /// Check-ins listed next to the monitor form
    pub recent_check_ins: usize,
    /// Check-ins listed on the patterns timeline
    pub timeline_entries: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            recent_check_ins: 5,
            timeline_entries: 10,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct UserSettings {
    display: DisplaySettings,
    analysis: PatternConfig,
}

/// `settings.json` in the data directory, cached in memory.
pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                log_warn!(
                    "Ignoring unparsable settings at {}: {err}",
                    path.display()
                );
                UserSettings::default()
            })
        } else {
            UserSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn display(&self) -> DisplaySettings {
        self.read().display.clone()
    }

    pub fn analysis(&self) -> PatternConfig {
        self.read().analysis.clone()
    }

    pub fn update_display(&self, settings: DisplaySettings) -> Result<()> {
        let mut guard = self.write();
        guard.display = settings;
        self.persist(&guard)
    }

    pub fn update_analysis(&self, config: PatternConfig) -> Result<()> {
        let mut guard = self.write();
        guard.analysis = config;
        self.persist(&guard)
    }

    fn persist(&self, data: &UserSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory {}", parent.display())
            })?;
        }
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }

    fn read(&self) -> RwLockReadGuard<'_, UserSettings> {
        self.data.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, UserSettings> {
        self.data.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
