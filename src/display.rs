//! Presentation affordances: colour tones and icon names.
//!
//! Engines only produce closed enums; the mapping to anything visual lives
//! here so a different front end can swap it out.

use crate::models::{CheckInMood, PatternKind, RecommendationCategory, Trend};
use crate::scoring::ScoreCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Excellent,
    Good,
    Fair,
    Poor,
    Muted,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Excellent => "wellness-excellent",
            Tone::Good => "wellness-good",
            Tone::Fair => "wellness-fair",
            Tone::Poor => "wellness-poor",
            Tone::Muted => "muted",
        }
    }

    /// ANSI colour for terminal output.
    pub fn ansi(&self) -> &'static str {
        match self {
            Tone::Excellent => "\x1b[32m",
            Tone::Good => "\x1b[36m",
            Tone::Fair => "\x1b[33m",
            Tone::Poor => "\x1b[31m",
            Tone::Muted => "\x1b[90m",
        }
    }
}

pub const ANSI_RESET: &str = "\x1b[0m";

pub fn paint(text: &str, tone: Tone, color: bool) -> String {
    if color {
        format!("{}{text}{ANSI_RESET}", tone.ansi())
    } else {
        text.to_string()
    }
}

pub fn score_tone(category: ScoreCategory) -> Tone {
    match category {
        ScoreCategory::Excellent => Tone::Excellent,
        ScoreCategory::Good => Tone::Good,
        ScoreCategory::Fair => Tone::Fair,
        ScoreCategory::NeedsAttention => Tone::Poor,
    }
}

pub fn trend_tone(trend: Trend) -> Tone {
    match trend {
        Trend::Up => Tone::Excellent,
        Trend::Down => Tone::Poor,
        Trend::Stable => Tone::Fair,
    }
}

pub fn mood_tone(mood: &CheckInMood) -> Tone {
    match mood {
        CheckInMood::Excellent => Tone::Excellent,
        CheckInMood::Good => Tone::Good,
        CheckInMood::Neutral => Tone::Fair,
        CheckInMood::Stressed | CheckInMood::Poor => Tone::Poor,
        CheckInMood::Unrecognized(_) => Tone::Muted,
    }
}

pub fn recommendation_icon(category: RecommendationCategory) -> &'static str {
    match category {
        RecommendationCategory::Sleep => "moon",
        RecommendationCategory::Stress => "brain",
        RecommendationCategory::Hydration => "droplet",
        RecommendationCategory::DigitalWellness => "eye",
        RecommendationCategory::PhysicalActivity => "activity",
        RecommendationCategory::WorkBreaks => "coffee",
        RecommendationCategory::MentalHealth => "heart",
        RecommendationCategory::Focus => "target",
        RecommendationCategory::Energy => "zap",
        RecommendationCategory::Mood => "heart",
        RecommendationCategory::Environment => "laptop",
        RecommendationCategory::RestPractices => "moon",
        RecommendationCategory::PersistentStress => "alert-circle",
        RecommendationCategory::Balanced => "check-circle",
    }
}

pub fn pattern_icon(kind: PatternKind) -> &'static str {
    match kind {
        PatternKind::Focus => "zap",
        PatternKind::Stress | PatternKind::Mood => "brain",
        PatternKind::Energy => "activity",
        PatternKind::Routine => "clock",
        PatternKind::Info => "bar-chart",
    }
}

pub fn trend_icon(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "trending-up",
        Trend::Down => "trending-down",
        Trend::Stable => "activity",
    }
}
