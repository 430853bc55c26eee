use anyhow::Result;
use chrono::Utc;
use clap::Args;
use serde::Serialize;

use super::{print_recommendations, AppState, Output};
use crate::display::mood_tone;
use crate::forms::CheckInForm;
use crate::models::{Activity, CheckIn, CheckInMood, CheckInState, Recommendation};
use crate::patterns::latest_first;
use crate::recommendations::for_check_in;
use crate::utils::time::format_relative;
use crate::{log_debug, log_info};

const ENABLE_LOGS: bool = true;

#[derive(Debug, Args)]
pub struct CheckInArgs {
    /// Excellent, Good, Neutral, Stressed or Poor
    #[arg(long, default_value = "Neutral")]
    pub mood: String,

    /// 1-10
    #[arg(long, default_value_t = 5)]
    pub focus: u8,

    /// 1-10
    #[arg(long, default_value_t = 5)]
    pub stress: u8,

    /// 1-10
    #[arg(long, default_value_t = 5)]
    pub energy: u8,

    /// Working, Exercising, Resting or Socializing
    #[arg(long)]
    pub activity: Option<String>,

    /// Show recommendations without saving the check-in
    #[arg(long)]
    pub preview: bool,
}

impl CheckInArgs {
    fn state(&self) -> CheckInState {
        CheckInState {
            mood: CheckInMood::from(self.mood.clone()),
            focus_level: self.focus,
            stress_level: self.stress,
            energy: self.energy,
            activity: self.activity.clone().map(Activity::from),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckInView {
    saved: Option<CheckIn>,
    recommendations: Vec<Recommendation>,
    recent: Vec<CheckIn>,
}

pub(crate) async fn run(state: &AppState, out: &Output, args: CheckInArgs) -> Result<()> {
    let current = args.state();
    let history = state.records.load_check_ins().await?;
    log_debug!("Loaded {} prior check-ins", history.len());

    // Rules see the history as it was before this entry.
    let recommendations = for_check_in(&current, &history);

    let mut history = history;
    let saved = if args.preview {
        None
    } else {
        let entry = CheckInForm::with_state(current).submit(Utc::now())?;
        let total = state.records.append_check_in(entry.clone()).await?;
        log_info!("Check-in saved ({total} total)");
        history.push(entry.clone());
        Some(entry)
    };

    let view = CheckInView {
        saved,
        recommendations,
        recent: latest_first(&history, state.settings.display().recent_check_ins),
    };

    if out.json {
        return out.print_json(&view);
    }

    if view.saved.is_some() {
        println!("Check-in saved!");
        println!();
    }

    println!("Recommendations");
    print_recommendations(out, &view.recommendations);
    println!();

    println!("Recent check-ins");
    if view.recent.is_empty() {
        println!("  No check-ins yet.");
    }
    let now = Utc::now();
    for entry in &view.recent {
        println!(
            "  {:<9} {:<11} focus {:>2}  stress {:>2}  energy {:>2}  {}",
            format_relative(entry.timestamp, now),
            out.paint(entry.mood.as_str(), mood_tone(&entry.mood)),
            entry.focus_level,
            entry.stress_level,
            entry.energy,
            entry.activity.as_str()
        );
    }

    Ok(())
}
