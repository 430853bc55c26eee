//! Derived outputs of the engines. Never persisted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum RecommendationCategory {
    // Assessment rules
    Sleep,
    Stress,
    Hydration,
    DigitalWellness,
    PhysicalActivity,
    WorkBreaks,
    MentalHealth,
    // Monitor rules
    Focus,
    Energy,
    Mood,
    Environment,
    RestPractices,
    PersistentStress,
    Balanced,
}

impl RecommendationCategory {
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationCategory::Sleep => "Sleep",
            RecommendationCategory::Stress => "Stress",
            RecommendationCategory::Hydration => "Hydration",
            RecommendationCategory::DigitalWellness => "Digital Wellness",
            RecommendationCategory::PhysicalActivity => "Physical Activity",
            RecommendationCategory::WorkBreaks => "Work Breaks",
            RecommendationCategory::MentalHealth => "Mental Health",
            RecommendationCategory::Focus => "Focus",
            RecommendationCategory::Energy => "Energy",
            RecommendationCategory::Mood => "Mood",
            RecommendationCategory::Environment => "Environment",
            RecommendationCategory::RestPractices => "Rest Practices",
            RecommendationCategory::PersistentStress => "Persistent Stress",
            RecommendationCategory::Balanced => "Balanced",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl Recommendation {
    pub fn new(
        category: RecommendationCategory,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            category,
            title: title.into(),
            description: description.into(),
            priority,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum PatternKind {
    Focus,
    Stress,
    Energy,
    Routine,
    Mood,
    Info,
}

impl PatternKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::Focus => "focus",
            PatternKind::Stress => "stress",
            PatternKind::Energy => "energy",
            PatternKind::Routine => "routine",
            PatternKind::Mood => "mood",
            PatternKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pattern {
    pub kind: PatternKind,
    pub title: String,
    pub description: String,
    pub trend: Trend,
}

impl Pattern {
    pub fn new(
        kind: PatternKind,
        title: impl Into<String>,
        description: impl Into<String>,
        trend: Trend,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            trend,
        }
    }
}
