mod commands;
mod db;
pub mod display;
pub mod forms;
pub mod models;
pub mod patterns;
pub mod recommendations;
pub mod scoring;
pub mod settings;
pub mod store;
pub mod utils;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;

use commands::{
    assess::AssessArgs, check_in::CheckInArgs, dashboard::DashboardArgs,
    settings::SettingsArgs, AppState, Output,
};

pub use db::{Database, RecordMeta};
pub use models::{AssessmentRecord, CheckIn, CheckInState, Pattern, Recommendation};
pub use patterns::{analyze, Analysis};
pub use recommendations::{for_assessment, for_check_in};
pub use scoring::{score, WellnessScore};
pub use store::{RecordStore, WellnessRecords};

const ENABLE_LOGS: bool = true;

#[derive(Debug, Parser)]
#[command(name = "wellpulse", version, about = "Wellness self-assessment and check-in tracker")]
struct Cli {
    /// Directory holding the record database and settings
    #[arg(long, global = true, env = "WELLPULSE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Disable ANSI colours
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Take the questionnaire and show the dashboard
    Assess(AssessArgs),
    /// Show the score and recommendations for the saved assessment
    Dashboard(DashboardArgs),
    /// Record how you feel right now
    CheckIn(CheckInArgs),
    /// Summarise and analyse the check-in history
    Patterns,
    /// List what is stored on disk
    Status,
    /// Delete the assessment and all check-ins
    Clear,
    /// Show or change settings
    Settings(SettingsArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    utils::logging::init(level);

    let data_dir = cli.data_dir.unwrap_or_else(commands::default_data_dir);
    crate::log_debug!("Using data directory {}", data_dir.display());

    let state = AppState::open(&data_dir)?;
    let out = Output {
        json: cli.json,
        color: !cli.no_color && !cli.json,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;

    runtime.block_on(async move {
        match cli.command {
            Commands::Assess(args) => commands::assess::run(&state, &out, args).await,
            Commands::Dashboard(args) => commands::dashboard::run(&state, &out, args).await,
            Commands::CheckIn(args) => commands::check_in::run(&state, &out, args).await,
            Commands::Patterns => commands::patterns::run(&state, &out).await,
            Commands::Status => commands::records::status(&state, &out).await,
            Commands::Clear => commands::records::clear(&state, &out).await,
            Commands::Settings(args) => commands::settings::run(&state, &out, args),
        }
    })
}
