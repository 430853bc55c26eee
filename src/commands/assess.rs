use anyhow::Result;
use clap::Args;

use super::{dashboard, AppState, Output};
use crate::forms::AssessmentForm;
use crate::log_info;
use crate::models::{AssessmentMood, ExerciseFrequency, WorkBreaks};

const ENABLE_LOGS: bool = true;

/// Answers for the five-step questionnaire. Omitted sliders keep the
/// questionnaire defaults; the three choice questions are required.
#[derive(Debug, Args)]
pub struct AssessArgs {
    /// Excellent, Good, Okay, "Not Great" or Poor
    #[arg(long)]
    pub mood: Option<String>,

    /// 1-10
    #[arg(long)]
    pub sleep_quality: Option<u8>,

    /// 3-12 in 0.5 steps
    #[arg(long)]
    pub sleep_hours: Option<f64>,

    /// 1-10, higher is more stressed
    #[arg(long)]
    pub stress: Option<u8>,

    /// Daily, "3-4 times per week", "1-2 times per week", Rarely or Never
    #[arg(long)]
    pub exercise: Option<String>,

    /// Glasses per day, 0-15
    #[arg(long)]
    pub water: Option<u8>,

    /// Hours per day, 0-16 in 0.5 steps
    #[arg(long)]
    pub screen_time: Option<f64>,

    /// "Yes, regularly", Sometimes, Rarely or No
    #[arg(long)]
    pub work_breaks: Option<String>,

    #[arg(long, default_value = "")]
    pub posture: String,
}

impl AssessArgs {
    fn into_form(self) -> AssessmentForm {
        let mut form = AssessmentForm::new();
        let draft = &mut form.draft;

        draft.mood = self.mood.map(AssessmentMood::from);
        draft.exercise_frequency = self.exercise.map(ExerciseFrequency::from);
        draft.work_breaks = self.work_breaks.map(WorkBreaks::from);
        if let Some(value) = self.sleep_quality {
            draft.sleep_quality = value;
        }
        if let Some(value) = self.sleep_hours {
            draft.sleep_hours = value;
        }
        if let Some(value) = self.stress {
            draft.stress_level = value;
        }
        if let Some(value) = self.water {
            draft.water_intake = value;
        }
        if let Some(value) = self.screen_time {
            draft.screen_time = value;
        }
        draft.posture = self.posture;

        form
    }
}

pub(crate) async fn run(state: &AppState, out: &Output, args: AssessArgs) -> Result<()> {
    let record = args.into_form().complete()?;
    state.records.save_assessment(&record).await?;
    log_info!("Assessment completed");

    dashboard::render(out, record)
}
