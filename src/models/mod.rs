pub mod assessment;
pub mod check_in;
pub mod insight;

pub use assessment::{AssessmentMood, AssessmentRecord, ExerciseFrequency, WorkBreaks};
pub use check_in::{Activity, CheckIn, CheckInMood, CheckInState};
pub use insight::{Pattern, PatternKind, Priority, Recommendation, RecommendationCategory, Trend};
