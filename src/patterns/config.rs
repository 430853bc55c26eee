use serde::{Deserialize, Serialize};

/// Window size and thresholds for trend detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatternConfig {
    /// Histories shorter than this only report insufficient data
    pub min_history: usize,

    /// Entries in the "recent" window and in the "older" window before it
    pub window_size: usize,

    /// Mean change (in points) that counts as a focus or stress trend
    pub trend_delta: f64,

    /// Mean recent energy bounds
    pub low_energy: f64,
    pub high_energy: f64,

    /// Share of the recent window one activity must exceed to be a routine
    pub routine_share: f64,

    /// Mean absolute consecutive mood change bounds
    pub volatile_mood: f64,
    pub stable_mood: f64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            min_history: 3,
            window_size: 7,
            trend_delta: 1.0,
            low_energy: 4.0,
            high_energy: 7.0,
            routine_share: 0.6,
            volatile_mood: 2.0,
            stable_mood: 1.0,
        }
    }
}
