//! Property-based tests for the scoring, recommendation and pattern engines.
//!
//! Inputs are generated inside the ranges the forms enforce, so every
//! property here holds for anything a user can actually submit.

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use wellpulse_lib::models::{
    Activity, AssessmentMood, AssessmentRecord, CheckIn, CheckInMood, CheckInState,
    ExerciseFrequency, RecommendationCategory, WorkBreaks,
};
use wellpulse_lib::patterns::{analyze, summarize};
use wellpulse_lib::recommendations::{for_assessment, for_check_in};
use wellpulse_lib::scoring::{score, ScoreCategory};

fn half_steps(min: f64, max: f64) -> impl Strategy<Value = f64> {
    let steps = ((max - min) * 2.0) as u32;
    (0..=steps).prop_map(move |n| min + f64::from(n) * 0.5)
}

fn arb_record() -> impl Strategy<Value = AssessmentRecord> {
    (
        prop::sample::select(AssessmentMood::ALL.to_vec()),
        1u8..=10,
        half_steps(3.0, 12.0),
        1u8..=10,
        prop::sample::select(ExerciseFrequency::ALL.to_vec()),
        0u8..=15,
        half_steps(0.0, 16.0),
        prop::sample::select(WorkBreaks::ALL.to_vec()),
    )
        .prop_map(
            |(mood, sleep_quality, sleep_hours, stress_level, exercise, water, screen, breaks)| {
                AssessmentRecord {
                    mood,
                    sleep_quality,
                    sleep_hours,
                    stress_level,
                    exercise_frequency: exercise,
                    water_intake: water,
                    screen_time: screen,
                    work_breaks: breaks,
                    posture: String::new(),
                }
            },
        )
}

fn arb_state() -> impl Strategy<Value = CheckInState> {
    (
        prop::sample::select(CheckInMood::ALL.to_vec()),
        1u8..=10,
        1u8..=10,
        1u8..=10,
        prop::option::of(prop::sample::select(Activity::ALL.to_vec())),
    )
        .prop_map(|(mood, focus_level, stress_level, energy, activity)| CheckInState {
            mood,
            focus_level,
            stress_level,
            energy,
            activity,
        })
}

fn arb_history(max: usize) -> impl Strategy<Value = Vec<CheckIn>> {
    prop::collection::vec(
        (
            prop::sample::select(CheckInMood::ALL.to_vec()),
            1u8..=10,
            1u8..=10,
            1u8..=10,
            prop::sample::select(Activity::ALL.to_vec()),
        ),
        0..=max,
    )
    .prop_map(|entries| {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (mood, focus_level, stress_level, energy, activity))| CheckIn {
                timestamp: start + Duration::hours(i as i64),
                mood,
                focus_level,
                stress_level,
                energy,
                activity,
            })
            .collect()
    })
}

fn rank(category: ScoreCategory) -> u8 {
    match category {
        ScoreCategory::NeedsAttention => 0,
        ScoreCategory::Fair => 1,
        ScoreCategory::Good => 2,
        ScoreCategory::Excellent => 3,
    }
}

// ============================================================================
// Scoring
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Valid answers always land between the worst and best case.
    #[test]
    fn score_stays_in_range(record in arb_record()) {
        let result = score(&record);
        prop_assert!((17..=100).contains(&result.value), "score {} out of range", result.value);
        prop_assert_eq!(result.category, ScoreCategory::from_score(result.value));
    }

    #[test]
    fn score_is_deterministic(record in arb_record()) {
        prop_assert_eq!(score(&record), score(&record.clone()));
    }

    /// A higher score never gets a worse label.
    #[test]
    fn category_is_monotonic(a in 0u32..=120, b in 0u32..=120) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rank(ScoreCategory::from_score(low)) <= rank(ScoreCategory::from_score(high)));
    }

    /// Lowering stress by one never lowers the score.
    #[test]
    fn less_stress_never_hurts(record in arb_record()) {
        prop_assume!(record.stress_level > 1);
        let mut calmer = record.clone();
        calmer.stress_level -= 1;
        prop_assert!(score(&calmer).value >= score(&record).value);
    }

    #[test]
    fn record_survives_json(record in arb_record()) {
        let json = serde_json::to_string(&record).unwrap();
        let decoded: AssessmentRecord = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded, record);
    }
}

// ============================================================================
// Recommendations
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn assessment_rules_fire_at_most_once(record in arb_record()) {
        let recs = for_assessment(&record);
        prop_assert!(recs.len() <= 7);
        let mut categories: Vec<_> = recs.iter().map(|r| r.category).collect();
        categories.dedup();
        prop_assert_eq!(categories.len(), recs.len());
    }

    /// The monitor always says something; the balanced fallback is exclusive.
    #[test]
    fn monitor_is_never_silent(state in arb_state(), history in arb_history(12)) {
        let recs = for_check_in(&state, &history);
        prop_assert!(!recs.is_empty());

        let balanced = recs
            .iter()
            .filter(|r| r.category == RecommendationCategory::Balanced)
            .count();
        if balanced > 0 {
            prop_assert_eq!(recs.len(), 1);
            prop_assert_eq!(recs[0].title.as_str(), "You're Doing Great!");
        }
    }
}

// ============================================================================
// Patterns
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn short_history_is_insufficient(history in arb_history(2)) {
        let analysis = analyze(&history);
        prop_assert_eq!(analysis.patterns.len(), 1);
        prop_assert_eq!(analysis.patterns[0].title.as_str(), "Insufficient Data");
    }

    #[test]
    fn long_history_never_reports_insufficient(history in arb_history(30)) {
        prop_assume!(history.len() >= 3);
        let analysis = analyze(&history);
        prop_assert!(analysis.patterns.iter().all(|p| p.title != "Insufficient Data"));
    }

    /// Averages stay on the 1-10 scale and the count matches.
    #[test]
    fn summary_is_bounded(history in arb_history(30)) {
        match summarize(&history) {
            None => prop_assert!(history.is_empty()),
            Some(summary) => {
                prop_assert_eq!(summary.total_check_ins, history.len());
                for avg in [summary.avg_focus, summary.avg_stress, summary.avg_energy] {
                    prop_assert!((1.0..=10.0).contains(&avg), "average {} out of range", avg);
                }
                prop_assert!(history
                    .iter()
                    .any(|c| c.activity.as_str() == summary.most_common_activity));
            }
        }
    }

    #[test]
    fn history_survives_json(history in arb_history(10)) {
        let json = serde_json::to_string(&history).unwrap();
        let decoded: Vec<CheckIn> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded, history);
    }
}
