//! Assessment-related data models.
//!
//! `AssessmentRecord` is the baseline snapshot produced by the five-step
//! questionnaire and stored under the `wellnessData` key. Enumerated fields
//! are encoded with the questionnaire's display literals ("Not Great",
//! "3-4 times per week", ...) so previously stored records decode unchanged.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssessmentMood {
    Excellent,
    Good,
    Okay,
    NotGreat,
    Poor,
    Unrecognized(String),
}

impl AssessmentMood {
    pub const ALL: [AssessmentMood; 5] = [
        AssessmentMood::Excellent,
        AssessmentMood::Good,
        AssessmentMood::Okay,
        AssessmentMood::NotGreat,
        AssessmentMood::Poor,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            AssessmentMood::Excellent => "Excellent",
            AssessmentMood::Good => "Good",
            AssessmentMood::Okay => "Okay",
            AssessmentMood::NotGreat => "Not Great",
            AssessmentMood::Poor => "Poor",
            AssessmentMood::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for AssessmentMood {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Excellent" => AssessmentMood::Excellent,
            "Good" => AssessmentMood::Good,
            "Okay" => AssessmentMood::Okay,
            "Not Great" => AssessmentMood::NotGreat,
            "Poor" => AssessmentMood::Poor,
            _ => AssessmentMood::Unrecognized(value),
        }
    }
}

impl From<AssessmentMood> for String {
    fn from(value: AssessmentMood) -> Self {
        match value {
            AssessmentMood::Unrecognized(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExerciseFrequency {
    Daily,
    ThreeToFourPerWeek,
    OneToTwoPerWeek,
    Rarely,
    Never,
    Unrecognized(String),
}

impl ExerciseFrequency {
    pub const ALL: [ExerciseFrequency; 5] = [
        ExerciseFrequency::Daily,
        ExerciseFrequency::ThreeToFourPerWeek,
        ExerciseFrequency::OneToTwoPerWeek,
        ExerciseFrequency::Rarely,
        ExerciseFrequency::Never,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ExerciseFrequency::Daily => "Daily",
            ExerciseFrequency::ThreeToFourPerWeek => "3-4 times per week",
            ExerciseFrequency::OneToTwoPerWeek => "1-2 times per week",
            ExerciseFrequency::Rarely => "Rarely",
            ExerciseFrequency::Never => "Never",
            ExerciseFrequency::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for ExerciseFrequency {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Daily" => ExerciseFrequency::Daily,
            "3-4 times per week" => ExerciseFrequency::ThreeToFourPerWeek,
            "1-2 times per week" => ExerciseFrequency::OneToTwoPerWeek,
            "Rarely" => ExerciseFrequency::Rarely,
            "Never" => ExerciseFrequency::Never,
            _ => ExerciseFrequency::Unrecognized(value),
        }
    }
}

impl From<ExerciseFrequency> for String {
    fn from(value: ExerciseFrequency) -> Self {
        match value {
            ExerciseFrequency::Unrecognized(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkBreaks {
    Regularly,
    Sometimes,
    Rarely,
    No,
    Unrecognized(String),
}

impl WorkBreaks {
    pub const ALL: [WorkBreaks; 4] = [
        WorkBreaks::Regularly,
        WorkBreaks::Sometimes,
        WorkBreaks::Rarely,
        WorkBreaks::No,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            WorkBreaks::Regularly => "Yes, regularly",
            WorkBreaks::Sometimes => "Sometimes",
            WorkBreaks::Rarely => "Rarely",
            WorkBreaks::No => "No",
            WorkBreaks::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for WorkBreaks {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Yes, regularly" => WorkBreaks::Regularly,
            "Sometimes" => WorkBreaks::Sometimes,
            "Rarely" => WorkBreaks::Rarely,
            "No" => WorkBreaks::No,
            _ => WorkBreaks::Unrecognized(value),
        }
    }
}

impl From<WorkBreaks> for String {
    fn from(value: WorkBreaks) -> Self {
        match value {
            WorkBreaks::Unrecognized(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

/// Baseline self-assessment, replaced wholesale on every retake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub mood: AssessmentMood,
    /// 1–10
    pub sleep_quality: u8,
    /// 3–12 in half-hour steps
    pub sleep_hours: f64,
    /// 1–10, higher means more stressed
    pub stress_level: u8,
    pub exercise_frequency: ExerciseFrequency,
    /// Glasses per day, 0–15
    pub water_intake: u8,
    /// Hours per day, 0–16 in half-hour steps
    pub screen_time: f64,
    pub work_breaks: WorkBreaks,
    #[serde(default)]
    pub posture: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_display_literals() {
        let json = r#"{
            "mood": "Not Great",
            "sleepQuality": 6,
            "sleepHours": 6.5,
            "stressLevel": 7,
            "exerciseFrequency": "3-4 times per week",
            "waterIntake": 5,
            "screenTime": 9.5,
            "workBreaks": "Yes, regularly",
            "posture": ""
        }"#;

        let record: AssessmentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.mood, AssessmentMood::NotGreat);
        assert_eq!(record.exercise_frequency, ExerciseFrequency::ThreeToFourPerWeek);
        assert_eq!(record.work_breaks, WorkBreaks::Regularly);
        assert_eq!(record.sleep_hours, 6.5);
        assert_eq!(record.screen_time, 9.5);
    }

    #[test]
    fn field_order_does_not_matter() {
        let json = r#"{
            "posture": "",
            "workBreaks": "Sometimes",
            "screenTime": 4,
            "waterIntake": 8,
            "exerciseFrequency": "Daily",
            "stressLevel": 3,
            "sleepHours": 7.5,
            "sleepQuality": 9,
            "mood": "Good"
        }"#;

        let record: AssessmentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.mood, AssessmentMood::Good);
        assert_eq!(record.sleep_quality, 9);
        assert_eq!(record.sleep_hours, 7.5);
        assert_eq!(record.stress_level, 3);
        assert_eq!(record.water_intake, 8);
        assert_eq!(record.screen_time, 4.0);
        assert_eq!(record.work_breaks, WorkBreaks::Sometimes);
    }

    #[test]
    fn unknown_literal_survives_reencoding() {
        let mood: AssessmentMood = serde_json::from_str("\"Meh\"").unwrap();
        assert_eq!(mood, AssessmentMood::Unrecognized("Meh".into()));
        assert_eq!(serde_json::to_string(&mood).unwrap(), "\"Meh\"");
    }

    #[test]
    fn missing_posture_defaults_to_empty() {
        let json = r#"{
            "mood": "Good",
            "sleepQuality": 8,
            "sleepHours": 8,
            "stressLevel": 3,
            "exerciseFrequency": "Daily",
            "waterIntake": 8,
            "screenTime": 4,
            "workBreaks": "Sometimes"
        }"#;

        let record: AssessmentRecord = serde_json::from_str(json).unwrap();
        assert!(record.posture.is_empty());
        assert_eq!(record.sleep_hours, 8.0);
    }
}
