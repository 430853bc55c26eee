use crate::models::{
    Activity, CheckIn, CheckInMood, CheckInState, Priority, Recommendation,
    RecommendationCategory,
};

/// How many of the latest stored check-ins feed the persistent-stress rule.
const PERSISTENT_STRESS_WINDOW: usize = 3;
const PERSISTENT_STRESS_THRESHOLD: f64 = 6.0;

/// Rules over the in-progress check-in plus the stored history.
///
/// `history` is in storage order (oldest first). An empty result is never
/// returned: when nothing fires a single low-priority entry is emitted.
pub fn for_check_in(current: &CheckInState, history: &[CheckIn]) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if current.focus_level < 4 {
        recs.push(Recommendation::new(
            RecommendationCategory::Focus,
            "Boost Your Focus",
            "Try the Pomodoro technique: 25 minutes of focused work followed by a 5-minute break. Eliminate distractions and use focus music or white noise.",
            Priority::High,
        ));
    }

    if current.stress_level > 7 {
        recs.push(Recommendation::new(
            RecommendationCategory::Stress,
            "Reduce Stress Now",
            "Take 5 deep breaths: Inhale for 4 counts, hold for 4, exhale for 6. Step away from your screen and do light stretching for 2 minutes.",
            Priority::High,
        ));
    }

    if current.energy < 4 {
        recs.push(Recommendation::new(
            RecommendationCategory::Energy,
            "Energy Boost",
            "Take a 10-minute walk outside for natural light exposure. Drink a glass of water and have a healthy snack with protein and complex carbs.",
            Priority::High,
        ));
    }

    if matches!(current.mood, CheckInMood::Poor | CheckInMood::Stressed) {
        recs.push(Recommendation::new(
            RecommendationCategory::Mood,
            "Improve Your Mood",
            "Listen to uplifting music, practice gratitude by writing 3 things you're grateful for, or connect with a friend for a quick chat.",
            Priority::High,
        ));
    }

    if current.activity == Some(Activity::Working) && current.focus_level < 5 {
        recs.push(Recommendation::new(
            RecommendationCategory::Environment,
            "Optimize Work Environment",
            "Ensure proper lighting, adjust your posture, and organize your workspace. Use website blockers for distracting sites during focus time.",
            Priority::Medium,
        ));
    }

    if current.activity == Some(Activity::Resting) && current.stress_level > 5 {
        recs.push(Recommendation::new(
            RecommendationCategory::RestPractices,
            "Better Rest Practices",
            "Practice progressive muscle relaxation: tense and release each muscle group. Try a guided meditation or gentle yoga for 10 minutes.",
            Priority::Medium,
        ));
    }

    if let Some(avg_stress) = recent_stress_average(history) {
        if avg_stress > PERSISTENT_STRESS_THRESHOLD {
            recs.push(Recommendation::new(
                RecommendationCategory::PersistentStress,
                "Persistent Stress Detected",
                "Your stress levels have been elevated. Consider scheduling regular breaks, practicing mindfulness, or speaking with a wellness professional.",
                Priority::High,
            ));
        }
    }

    if recs.is_empty() {
        recs.push(Recommendation::new(
            RecommendationCategory::Balanced,
            "You're Doing Great!",
            "Your current state looks balanced. Keep maintaining healthy habits: stay hydrated, take regular breaks, and practice mindfulness.",
            Priority::Low,
        ));
    }

    recs
}

/// Mean stress of the three most recent stored check-ins, if there are three.
fn recent_stress_average(history: &[CheckIn]) -> Option<f64> {
    if history.len() < PERSISTENT_STRESS_WINDOW {
        return None;
    }

    let total: u32 = history
        .iter()
        .rev()
        .take(PERSISTENT_STRESS_WINDOW)
        .map(|c| u32::from(c.stress_level))
        .sum();

    Some(f64::from(total) / PERSISTENT_STRESS_WINDOW as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn entry(minutes: i64, stress: u8) -> CheckIn {
        CheckIn {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap()
                + Duration::minutes(minutes),
            mood: CheckInMood::Neutral,
            focus_level: 6,
            stress_level: stress,
            energy: 6,
            activity: Activity::Working,
        }
    }

    fn categories(recs: &[Recommendation]) -> Vec<RecommendationCategory> {
        recs.iter().map(|r| r.category).collect()
    }

    #[test]
    fn default_state_is_balanced() {
        let recs = for_check_in(&CheckInState::default(), &[]);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].category, RecommendationCategory::Balanced);
        assert_eq!(recs[0].priority, Priority::Low);
    }

    #[test]
    fn rules_fire_in_evaluation_order() {
        let current = CheckInState {
            mood: CheckInMood::Stressed,
            focus_level: 2,
            stress_level: 9,
            energy: 2,
            activity: Some(Activity::Working),
        };

        let history = vec![entry(0, 8), entry(30, 7), entry(60, 9)];
        assert_eq!(
            categories(&for_check_in(&current, &history)),
            vec![
                RecommendationCategory::Focus,
                RecommendationCategory::Stress,
                RecommendationCategory::Energy,
                RecommendationCategory::Mood,
                RecommendationCategory::Environment,
                RecommendationCategory::PersistentStress,
            ]
        );
    }

    #[test]
    fn resting_while_stressed() {
        let current = CheckInState {
            stress_level: 6,
            activity: Some(Activity::Resting),
            ..CheckInState::default()
        };
        assert_eq!(
            categories(&for_check_in(&current, &[])),
            vec![RecommendationCategory::RestPractices]
        );
    }

    #[test]
    fn unselected_activity_skips_activity_rules() {
        let current = CheckInState {
            focus_level: 4,
            stress_level: 6,
            activity: None,
            ..CheckInState::default()
        };
        assert_eq!(
            categories(&for_check_in(&current, &[])),
            vec![RecommendationCategory::Balanced]
        );
    }

    #[test]
    fn persistent_stress_uses_latest_three_only() {
        // Old entries are calm, the latest three average 7.
        let history = vec![
            entry(0, 1),
            entry(10, 1),
            entry(20, 6),
            entry(30, 7),
            entry(40, 8),
        ];
        let recs = for_check_in(&CheckInState::default(), &history);
        assert_eq!(
            categories(&recs),
            vec![RecommendationCategory::PersistentStress]
        );

        // Latest three average exactly 6: not above the threshold.
        let history = vec![entry(0, 9), entry(10, 5), entry(20, 6), entry(30, 7)];
        let recs = for_check_in(&CheckInState::default(), &history);
        assert_eq!(categories(&recs), vec![RecommendationCategory::Balanced]);
    }

    #[test]
    fn persistent_stress_needs_three_entries() {
        let history = vec![entry(0, 10), entry(10, 10)];
        let recs = for_check_in(&CheckInState::default(), &history);
        assert_eq!(categories(&recs), vec![RecommendationCategory::Balanced]);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let current = CheckInState {
            mood: CheckInMood::Poor,
            ..CheckInState::default()
        };
        let history = vec![entry(0, 8), entry(10, 8), entry(20, 8)];
        assert_eq!(
            for_check_in(&current, &history),
            for_check_in(&current, &history)
        );
    }
}
