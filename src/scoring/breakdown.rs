use serde::{Deserialize, Serialize};

use crate::models::AssessmentRecord;

/// The four headline cards shown next to the overall score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub mood: String,
    /// Out of 10
    pub sleep_quality: u8,
    /// Inverse of stress, out of 10
    pub calm: u8,
    pub water_glasses: u8,
}

pub fn breakdown(record: &AssessmentRecord) -> CategoryBreakdown {
    CategoryBreakdown {
        mood: record.mood.as_str().to_string(),
        sleep_quality: record.sleep_quality,
        calm: 11u8.saturating_sub(record.stress_level),
        water_glasses: record.water_intake,
    }
}
