//! Check-in data models.
//!
//! `CheckIn` is one timestamped entry of the append-only `checkIns` history.
//! Its mood vocabulary differs from the assessment's and is kept as a
//! separate type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CheckInMood {
    Excellent,
    Good,
    Neutral,
    Stressed,
    Poor,
    Unrecognized(String),
}

impl CheckInMood {
    pub const ALL: [CheckInMood; 5] = [
        CheckInMood::Excellent,
        CheckInMood::Good,
        CheckInMood::Neutral,
        CheckInMood::Stressed,
        CheckInMood::Poor,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            CheckInMood::Excellent => "Excellent",
            CheckInMood::Good => "Good",
            CheckInMood::Neutral => "Neutral",
            CheckInMood::Stressed => "Stressed",
            CheckInMood::Poor => "Poor",
            CheckInMood::Unrecognized(raw) => raw,
        }
    }

    /// Position on the 1 (Poor) to 5 (Excellent) scale used for volatility.
    pub fn ordinal(&self) -> Option<u8> {
        match self {
            CheckInMood::Excellent => Some(5),
            CheckInMood::Good => Some(4),
            CheckInMood::Neutral => Some(3),
            CheckInMood::Stressed => Some(2),
            CheckInMood::Poor => Some(1),
            CheckInMood::Unrecognized(_) => None,
        }
    }
}

impl From<String> for CheckInMood {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Excellent" => CheckInMood::Excellent,
            "Good" => CheckInMood::Good,
            "Neutral" => CheckInMood::Neutral,
            "Stressed" => CheckInMood::Stressed,
            "Poor" => CheckInMood::Poor,
            _ => CheckInMood::Unrecognized(value),
        }
    }
}

impl From<CheckInMood> for String {
    fn from(value: CheckInMood) -> Self {
        match value {
            CheckInMood::Unrecognized(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Activity {
    Working,
    Exercising,
    Resting,
    Socializing,
    Unrecognized(String),
}

impl Activity {
    pub const ALL: [Activity; 4] = [
        Activity::Working,
        Activity::Exercising,
        Activity::Resting,
        Activity::Socializing,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Activity::Working => "Working",
            Activity::Exercising => "Exercising",
            Activity::Resting => "Resting",
            Activity::Socializing => "Socializing",
            Activity::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for Activity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Working" => Activity::Working,
            "Exercising" => Activity::Exercising,
            "Resting" => Activity::Resting,
            "Socializing" => Activity::Socializing,
            _ => Activity::Unrecognized(value),
        }
    }
}

impl From<Activity> for String {
    fn from(value: Activity) -> Self {
        match value {
            Activity::Unrecognized(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

/// One stored entry of the check-in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub timestamp: DateTime<Utc>,
    pub mood: CheckInMood,
    pub focus_level: u8,
    pub stress_level: u8,
    pub energy: u8,
    pub activity: Activity,
}

/// Momentary state as captured by the monitor before it is saved.
///
/// `activity` stays `None` until the user picks one; the monitor still
/// evaluates recommendations on every change in the meantime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInState {
    pub mood: CheckInMood,
    pub focus_level: u8,
    pub stress_level: u8,
    pub energy: u8,
    pub activity: Option<Activity>,
}

impl Default for CheckInState {
    fn default() -> Self {
        Self {
            mood: CheckInMood::Neutral,
            focus_level: 5,
            stress_level: 5,
            energy: 5,
            activity: None,
        }
    }
}
