use crate::models::{
    AssessmentMood, AssessmentRecord, ExerciseFrequency, Priority, Recommendation,
    RecommendationCategory, WorkBreaks,
};

/// Rules over the baseline assessment, appended in evaluation order.
pub fn for_assessment(record: &AssessmentRecord) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if record.sleep_quality < 6 || record.sleep_hours < 7.0 {
        recommendations.push(Recommendation::new(
            RecommendationCategory::Sleep,
            "Improve Sleep Quality",
            "Try a consistent sleep schedule. Aim for 7-9 hours. Avoid screens 1 hour before bed and create a relaxing bedtime routine.",
            Priority::High,
        ));
    }

    if record.stress_level > 6 {
        recommendations.push(Recommendation::new(
            RecommendationCategory::Stress,
            "Stress Relief Exercises",
            "Practice deep breathing for 5 minutes: Inhale for 4 counts, hold for 4, exhale for 6. Try meditation apps or take short walks in nature.",
            Priority::High,
        ));
    }

    if record.water_intake < 6 {
        recommendations.push(Recommendation::new(
            RecommendationCategory::Hydration,
            "Increase Water Intake",
            format!(
                "You're drinking {} glasses. Aim for 8-10 glasses daily. Set hourly reminders and keep a water bottle nearby.",
                record.water_intake
            ),
            Priority::Medium,
        ));
    }

    if record.screen_time > 8.0 {
        recommendations.push(Recommendation::new(
            RecommendationCategory::DigitalWellness,
            "Reduce Screen Time",
            "Follow the 20-20-20 rule: Every 20 minutes, look at something 20 feet away for 20 seconds. Consider blue light filters.",
            Priority::Medium,
        ));
    }

    if matches!(
        record.exercise_frequency,
        ExerciseFrequency::Rarely | ExerciseFrequency::Never
    ) {
        recommendations.push(Recommendation::new(
            RecommendationCategory::PhysicalActivity,
            "Start Moving More",
            "Begin with 15-minute walks daily. Try desk stretches, stairs instead of elevators, or short yoga sessions.",
            Priority::High,
        ));
    }

    // Anything short of "Yes, regularly", including unrecognized answers.
    if record.work_breaks != WorkBreaks::Regularly {
        recommendations.push(Recommendation::new(
            RecommendationCategory::WorkBreaks,
            "Take Regular Breaks",
            "Use the Pomodoro Technique: 25 minutes of work, 5-minute breaks. Stand, stretch, or walk every hour to boost productivity and health.",
            Priority::Medium,
        ));
    }

    if matches!(record.mood, AssessmentMood::NotGreat | AssessmentMood::Poor) {
        recommendations.push(Recommendation::new(
            RecommendationCategory::MentalHealth,
            "Boost Your Mood",
            "Practice gratitude journaling, connect with friends, engage in hobbies you enjoy, or consider speaking with a mental health professional.",
            Priority::High,
        ));
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy() -> AssessmentRecord {
        AssessmentRecord {
            mood: AssessmentMood::Good,
            sleep_quality: 8,
            sleep_hours: 8.0,
            stress_level: 3,
            exercise_frequency: ExerciseFrequency::Daily,
            water_intake: 8,
            screen_time: 4.0,
            work_breaks: WorkBreaks::Regularly,
            posture: String::new(),
        }
    }

    fn categories(recs: &[Recommendation]) -> Vec<RecommendationCategory> {
        recs.iter().map(|r| r.category).collect()
    }

    #[test]
    fn healthy_record_triggers_nothing() {
        assert!(for_assessment(&healthy()).is_empty());
    }

    #[test]
    fn every_rule_fires_in_evaluation_order() {
        let record = AssessmentRecord {
            mood: AssessmentMood::Poor,
            sleep_quality: 3,
            sleep_hours: 5.0,
            stress_level: 9,
            exercise_frequency: ExerciseFrequency::Never,
            water_intake: 2,
            screen_time: 11.5,
            work_breaks: WorkBreaks::No,
            posture: String::new(),
        };

        let recs = for_assessment(&record);
        assert_eq!(
            categories(&recs),
            vec![
                RecommendationCategory::Sleep,
                RecommendationCategory::Stress,
                RecommendationCategory::Hydration,
                RecommendationCategory::DigitalWellness,
                RecommendationCategory::PhysicalActivity,
                RecommendationCategory::WorkBreaks,
                RecommendationCategory::MentalHealth,
            ]
        );
        // Medium entries stay interleaved with High ones.
        assert_eq!(recs[2].priority, Priority::Medium);
        assert_eq!(recs[4].priority, Priority::High);
    }

    #[test]
    fn hydration_mentions_current_glasses() {
        let mut record = healthy();
        record.water_intake = 3;

        let recs = for_assessment(&record);
        assert_eq!(recs.len(), 1);
        assert!(recs[0].description.starts_with("You're drinking 3 glasses."));
    }

    #[test]
    fn short_sleep_alone_triggers_sleep_rule() {
        let mut record = healthy();
        record.sleep_hours = 6.5;
        assert_eq!(
            categories(&for_assessment(&record)),
            vec![RecommendationCategory::Sleep]
        );
    }

    #[test]
    fn thresholds_are_strict() {
        let mut record = healthy();
        record.stress_level = 6;
        record.screen_time = 8.0;
        record.water_intake = 6;
        record.sleep_quality = 6;
        record.sleep_hours = 7.0;
        assert!(for_assessment(&record).is_empty());
    }

    #[test]
    fn occasional_breaks_still_recommended() {
        let mut record = healthy();
        record.work_breaks = WorkBreaks::Sometimes;
        assert_eq!(
            categories(&for_assessment(&record)),
            vec![RecommendationCategory::WorkBreaks]
        );
    }
}
