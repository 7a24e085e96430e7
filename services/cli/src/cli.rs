use crate::dashboard::{run_dashboard, DashboardArgs};
use crate::demo::{clear_demo_data, seed_demo_data, SeedArgs};
use crate::quiz::{run_quiz, QuizArgs};
use basecamp_quiz::config::AppConfig;
use basecamp_quiz::error::AppError;
use basecamp_quiz::telemetry;
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "Basecamp Coffee Quiz",
    about = "Take the coffee personality quiz and inspect its funnel analytics",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Take the coffee personality quiz
    Quiz(QuizArgs),
    /// Show funnel metrics from the recorded events (default command)
    Dashboard(DashboardArgs),
    /// Manage demo analytics data
    Data {
        #[command(subcommand)]
        command: DataCommand,
    },
}

#[derive(Subcommand, Debug)]
enum DataCommand {
    /// Replace the event log with a generated week of activity
    Seed(SeedArgs),
    /// Delete every recorded event
    Clear,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(?config.environment, data_dir = %config.storage.data_dir.display(), "configuration loaded");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Dashboard(DashboardArgs::default()));

    match command {
        Command::Quiz(args) => run_quiz(&config, args),
        Command::Dashboard(args) => run_dashboard(&config, args).await,
        Command::Data {
            command: DataCommand::Seed(args),
        } => seed_demo_data(&config, args),
        Command::Data {
            command: DataCommand::Clear,
        } => clear_demo_data(&config),
    }
}
