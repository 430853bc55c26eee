//! Composite wellness score over one assessment.

mod breakdown;

pub use breakdown::{breakdown, CategoryBreakdown};

use serde::{Deserialize, Serialize};

use crate::models::{AssessmentMood, AssessmentRecord, ExerciseFrequency};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ScoreCategory {
    Excellent,
    Good,
    Fair,
    NeedsAttention,
}

impl ScoreCategory {
    /// Step function over the rounded score.
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            ScoreCategory::Excellent
        } else if score >= 60 {
            ScoreCategory::Good
        } else if score >= 40 {
            ScoreCategory::Fair
        } else {
            ScoreCategory::NeedsAttention
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreCategory::Excellent => "Excellent",
            ScoreCategory::Good => "Good",
            ScoreCategory::Fair => "Fair",
            ScoreCategory::NeedsAttention => "Needs Attention",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WellnessScore {
    pub value: u32,
    pub category: ScoreCategory,
}

/// Un-rounded per-factor contributions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreComponents {
    pub mood: f64,
    pub sleep_quality: f64,
    pub sleep_duration: f64,
    pub stress: f64,
    pub exercise: f64,
    pub water: f64,
    pub screen_time: f64,
}

impl ScoreComponents {
    pub fn total(&self) -> f64 {
        self.mood
            + self.sleep_quality
            + self.sleep_duration
            + self.stress
            + self.exercise
            + self.water
            + self.screen_time
    }
}

/// Weighted sum of the factor contributions, rounded once at the end.
///
/// The sum is not clamped to 100.
pub fn score(record: &AssessmentRecord) -> WellnessScore {
    let total = components(record).total();
    let value = total.round().max(0.0) as u32;

    WellnessScore {
        value,
        category: ScoreCategory::from_score(value),
    }
}

pub fn components(record: &AssessmentRecord) -> ScoreComponents {
    ScoreComponents {
        mood: score_mood(&record.mood),
        sleep_quality: (f64::from(record.sleep_quality) / 10.0) * 15.0,
        sleep_duration: score_sleep_duration(record.sleep_hours),
        stress: ((11.0 - f64::from(record.stress_level)) / 10.0) * 15.0,
        exercise: score_exercise(&record.exercise_frequency),
        water: ((f64::from(record.water_intake) / 8.0) * 10.0).min(10.0),
        screen_time: (10.0 - (record.screen_time / 8.0) * 10.0).max(0.0),
    }
}

fn score_mood(mood: &AssessmentMood) -> f64 {
    match mood {
        AssessmentMood::Excellent => 20.0,
        AssessmentMood::Good => 16.0,
        AssessmentMood::Okay => 12.0,
        AssessmentMood::NotGreat => 8.0,
        AssessmentMood::Poor => 4.0,
        AssessmentMood::Unrecognized(_) => 0.0,
    }
}

/// 7–9 hours inclusive earns the full 15 points, anything else 10.
fn score_sleep_duration(hours: f64) -> f64 {
    if (7.0..=9.0).contains(&hours) {
        15.0
    } else {
        10.0
    }
}

fn score_exercise(frequency: &ExerciseFrequency) -> f64 {
    match frequency {
        ExerciseFrequency::Daily => 15.0,
        ExerciseFrequency::ThreeToFourPerWeek => 12.0,
        ExerciseFrequency::OneToTwoPerWeek => 8.0,
        ExerciseFrequency::Rarely => 4.0,
        ExerciseFrequency::Never => 0.0,
        ExerciseFrequency::Unrecognized(_) => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkBreaks;

    fn record() -> AssessmentRecord {
        AssessmentRecord {
            mood: AssessmentMood::Excellent,
            sleep_quality: 10,
            sleep_hours: 8.0,
            stress_level: 1,
            exercise_frequency: ExerciseFrequency::Daily,
            water_intake: 8,
            screen_time: 0.0,
            work_breaks: WorkBreaks::Regularly,
            posture: String::new(),
        }
    }

    #[test]
    fn best_case_scores_one_hundred() {
        let result = score(&record());
        assert_eq!(result.value, 100);
        assert_eq!(result.category, ScoreCategory::Excellent);
    }

    #[test]
    fn worst_case_rounds_once() {
        let worst = AssessmentRecord {
            mood: AssessmentMood::Poor,
            sleep_quality: 1,
            sleep_hours: 4.0,
            stress_level: 10,
            exercise_frequency: ExerciseFrequency::Never,
            water_intake: 0,
            screen_time: 16.0,
            work_breaks: WorkBreaks::No,
            posture: String::new(),
        };

        let parts = components(&worst);
        assert!((parts.total() - 17.0).abs() < 1e-9);

        let result = score(&worst);
        assert_eq!(result.value, 17);
        assert_eq!(result.category, ScoreCategory::NeedsAttention);
    }

    #[test]
    fn sleep_duration_bounds_are_inclusive() {
        assert_eq!(score_sleep_duration(7.0), 15.0);
        assert_eq!(score_sleep_duration(9.0), 15.0);
        assert_eq!(score_sleep_duration(6.5), 10.0);
        assert_eq!(score_sleep_duration(9.5), 10.0);
    }

    #[test]
    fn water_and_screen_terms_saturate() {
        let mut r = record();
        r.water_intake = 15;
        r.screen_time = 12.0;
        let parts = components(&r);
        assert_eq!(parts.water, 10.0);
        assert_eq!(parts.screen_time, 0.0);
    }

    #[test]
    fn unrecognized_literals_contribute_nothing() {
        let mut r = record();
        r.mood = AssessmentMood::Unrecognized("Meh".into());
        r.exercise_frequency = ExerciseFrequency::Unrecognized("Weekly".into());

        let parts = components(&r);
        assert_eq!(parts.mood, 0.0);
        assert_eq!(parts.exercise, 0.0);
        assert_eq!(score(&r).value, 65);
    }

    #[test]
    fn mid_range_records() {
        // 16 + 7.5 + 15 + 7.5 + 8 + 5 + 5 = 64
        let r = AssessmentRecord {
            mood: AssessmentMood::Good,
            sleep_quality: 5,
            sleep_hours: 7.0,
            stress_level: 6,
            exercise_frequency: ExerciseFrequency::OneToTwoPerWeek,
            water_intake: 4,
            screen_time: 4.0,
            work_breaks: WorkBreaks::Sometimes,
            posture: String::new(),
        };
        assert_eq!(score(&r).value, 64);

        // 12 + 6 + 10 + 4.5 + 4 + 1.25 + 3.75 = 41.5 -> 42
        let r = AssessmentRecord {
            mood: AssessmentMood::Okay,
            sleep_quality: 4,
            sleep_hours: 6.0,
            stress_level: 8,
            exercise_frequency: ExerciseFrequency::Rarely,
            water_intake: 1,
            screen_time: 5.0,
            work_breaks: WorkBreaks::Rarely,
            posture: String::new(),
        };
        assert_eq!(score(&r).value, 42);
        assert_eq!(score(&r).category, ScoreCategory::Fair);
    }

    #[test]
    fn category_steps() {
        assert_eq!(ScoreCategory::from_score(80), ScoreCategory::Excellent);
        assert_eq!(ScoreCategory::from_score(79), ScoreCategory::Good);
        assert_eq!(ScoreCategory::from_score(60), ScoreCategory::Good);
        assert_eq!(ScoreCategory::from_score(59), ScoreCategory::Fair);
        assert_eq!(ScoreCategory::from_score(40), ScoreCategory::Fair);
        assert_eq!(ScoreCategory::from_score(39), ScoreCategory::NeedsAttention);
    }
}
