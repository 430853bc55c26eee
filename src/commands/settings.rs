use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use super::{AppState, Output};
use crate::log_info;
use crate::patterns::PatternConfig;
use crate::settings::DisplaySettings;

const ENABLE_LOGS: bool = true;

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Print the current settings
    Show,
    /// Change how many check-ins are listed
    Display {
        #[arg(long)]
        recent: Option<usize>,
        #[arg(long)]
        timeline: Option<usize>,
    },
    /// Change the pattern analysis window
    Analysis {
        #[arg(long)]
        window: Option<usize>,
        #[arg(long)]
        trend_delta: Option<f64>,
    },
    /// Restore the default analysis thresholds
    ResetAnalysis,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SettingsView {
    display: DisplaySettings,
    analysis: PatternConfig,
}

pub(crate) fn run(state: &AppState, out: &Output, args: SettingsArgs) -> Result<()> {
    let settings = &state.settings;

    match args.command {
        SettingsCommand::Show => {}
        SettingsCommand::Display { recent, timeline } => {
            let mut display = settings.display();
            if let Some(value) = recent {
                display.recent_check_ins = value;
            }
            if let Some(value) = timeline {
                display.timeline_entries = value;
            }
            settings.update_display(display)?;
            log_info!("Display settings updated");
        }
        SettingsCommand::Analysis {
            window,
            trend_delta,
        } => {
            let mut analysis = settings.analysis();
            if let Some(value) = window {
                analysis.window_size = value.max(1);
            }
            if let Some(value) = trend_delta {
                analysis.trend_delta = value;
            }
            settings.update_analysis(analysis)?;
            log_info!("Analysis settings updated");
        }
        SettingsCommand::ResetAnalysis => {
            settings.update_analysis(PatternConfig::default())?;
            log_info!("Analysis settings reset");
        }
    }

    out.print_json(&SettingsView {
        display: settings.display(),
        analysis: settings.analysis(),
    })
}
