use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::{print_recommendations, AppState, Output};
use crate::display::score_tone;
use crate::models::{AssessmentRecord, Recommendation};
use crate::recommendations::for_assessment;
use crate::scoring::{breakdown, components, score, CategoryBreakdown, ScoreComponents, WellnessScore};

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Also print the per-factor contributions
    #[arg(long)]
    pub components: bool,
}

/// `assessment` is null until the questionnaire has been taken; the report
/// fields are only present alongside a record.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardView {
    assessment: Option<AssessmentRecord>,
    #[serde(flatten)]
    report: Option<Report>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    score: WellnessScore,
    breakdown: CategoryBreakdown,
    components: ScoreComponents,
    recommendations: Vec<Recommendation>,
}

impl DashboardView {
    fn build(assessment: Option<AssessmentRecord>) -> Self {
        let report = assessment.as_ref().map(|record| Report {
            score: score(record),
            breakdown: breakdown(record),
            components: components(record),
            recommendations: for_assessment(record),
        });
        Self { assessment, report }
    }
}

pub(crate) async fn run(state: &AppState, out: &Output, args: DashboardArgs) -> Result<()> {
    let view = DashboardView::build(state.records.load_assessment().await?);

    if out.json {
        return out.print_json(&view);
    }

    let Some(report) = &view.report else {
        println!("No assessment found. Run `wellpulse assess` to take the questionnaire.");
        return Ok(());
    };

    print_report(out, report);

    if args.components {
        let parts = &report.components;
        println!();
        println!("Contributions");
        println!("  mood            {:>5.1}", parts.mood);
        println!("  sleep quality   {:>5.1}", parts.sleep_quality);
        println!("  sleep duration  {:>5.1}", parts.sleep_duration);
        println!("  stress          {:>5.1}", parts.stress);
        println!("  exercise        {:>5.1}", parts.exercise);
        println!("  water           {:>5.1}", parts.water);
        println!("  screen time     {:>5.1}", parts.screen_time);
    }

    Ok(())
}

pub(crate) fn render(out: &Output, record: AssessmentRecord) -> Result<()> {
    let view = DashboardView::build(Some(record));

    if out.json {
        return out.print_json(&view);
    }
    if let Some(report) = &view.report {
        print_report(out, report);
    }
    Ok(())
}

fn print_report(out: &Output, report: &Report) {
    let tone = score_tone(report.score.category);
    println!(
        "Overall wellness score: {} ({})",
        out.paint(&report.score.value.to_string(), tone),
        out.paint(report.score.category.label(), tone)
    );
    println!();
    println!("  Mood          {}", report.breakdown.mood);
    println!("  Sleep quality {}/10", report.breakdown.sleep_quality);
    println!("  Calm          {}/10", report.breakdown.calm);
    println!("  Hydration     {} glasses", report.breakdown.water_glasses);
    println!();

    if report.recommendations.is_empty() {
        println!("No recommendations. Keep it up!");
    } else {
        println!("Personalized recommendations");
        print_recommendations(out, &report.recommendations);
    }
}
