use anyhow::Result;
use serde::Serialize;

use super::{AppState, Output};
use crate::display::{mood_tone, pattern_icon, trend_icon, trend_tone};
use crate::models::CheckIn;
use crate::patterns::{analyze_with, latest_first, Analysis};
use crate::utils::time::format_timestamp;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PatternsView {
    #[serde(flatten)]
    analysis: Analysis,
    timeline: Vec<CheckIn>,
}

pub(crate) async fn run(state: &AppState, out: &Output) -> Result<()> {
    let history = state.records.load_check_ins().await?;
    let view = PatternsView {
        analysis: analyze_with(&history, &state.settings.analysis()),
        timeline: latest_first(&history, state.settings.display().timeline_entries),
    };

    if out.json {
        return out.print_json(&view);
    }

    match &view.analysis.summary {
        Some(summary) => {
            println!("Total check-ins       {}", summary.total_check_ins);
            println!("Average focus         {}/10", summary.avg_focus);
            println!("Average stress        {}/10", summary.avg_stress);
            println!("Average energy        {}/10", summary.avg_energy);
            println!("Most common activity  {}", summary.most_common_activity);
        }
        None => {
            println!("Total check-ins       0");
            println!("Most common activity  N/A");
        }
    }
    println!();

    println!("Detected patterns");
    for pattern in &view.analysis.patterns {
        let tone = trend_tone(pattern.trend);
        println!(
            "  {} {} ({}, {})",
            out.paint(trend_icon(pattern.trend), tone),
            pattern.title,
            pattern.kind.as_str(),
            pattern_icon(pattern.kind)
        );
        println!("      {}", pattern.description);
    }

    if !view.timeline.is_empty() {
        println!();
        println!("Recent timeline");
        for entry in &view.timeline {
            println!(
                "  {:<16} {:<11} {:<11} F{} S{} E{}",
                format_timestamp(entry.timestamp),
                out.paint(entry.mood.as_str(), mood_tone(&entry.mood)),
                entry.activity.as_str(),
                entry.focus_level,
                entry.stress_level,
                entry.energy
            );
        }
    }

    Ok(())
}
