pub mod algorithm;
pub mod config;
pub mod stats;

pub use algorithm::{analyze, analyze_with, detect_patterns, Analysis};
pub use config::PatternConfig;
pub use stats::{summarize, Summary};

use crate::models::CheckIn;

/// The last `limit` check-ins, newest first.
pub fn latest_first(history: &[CheckIn], limit: usize) -> Vec<CheckIn> {
    history.iter().rev().take(limit).cloned().collect()
}
