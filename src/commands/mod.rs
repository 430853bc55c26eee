//! CLI front end over the store and the engines.

pub mod assess;
pub mod check_in;
pub mod dashboard;
pub mod patterns;
pub mod records;
pub mod settings;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::db::Database;
use crate::display::{paint, recommendation_icon, Tone};
use crate::models::{Priority, Recommendation};
use crate::settings::SettingsStore;
use crate::store::WellnessRecords;

pub(crate) struct AppState {
    pub(crate) db: Database,
    pub(crate) records: WellnessRecords<Database>,
    pub(crate) settings: SettingsStore,
}

impl AppState {
    pub(crate) fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

        let db = Database::new(data_dir.join("wellpulse.sqlite3"))?;
        let settings = SettingsStore::new(data_dir.join("settings.json"))?;

        Ok(Self {
            records: WellnessRecords::new(db.clone()),
            db,
            settings,
        })
    }
}

/// Rendering switches shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
    pub color: bool,
}

impl Output {
    pub(crate) fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    pub(crate) fn paint(&self, text: &str, tone: Tone) -> String {
        paint(text, tone, self.color)
    }
}

pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("wellpulse"))
        .unwrap_or_else(|| PathBuf::from(".wellpulse"))
}

fn priority_tone(priority: Priority) -> Tone {
    match priority {
        Priority::High => Tone::Poor,
        Priority::Medium => Tone::Fair,
        Priority::Low => Tone::Excellent,
    }
}

pub(crate) fn print_recommendations(out: &Output, recommendations: &[Recommendation]) {
    for rec in recommendations {
        let badge = out.paint(rec.priority.as_str(), priority_tone(rec.priority));
        println!(
            "  [{badge}] {} ({}, {})",
            rec.title,
            rec.category.label(),
            recommendation_icon(rec.category)
        );
        println!("      {}", rec.description);
    }
}
