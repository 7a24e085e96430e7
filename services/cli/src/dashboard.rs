use crate::infra::open_event_log;
use crate::quiz::bar;
use basecamp_quiz::analytics::{Dashboard, DashboardView, DemoDataGenerator, KeyValueStore};
use basecamp_quiz::config::AppConfig;
use basecamp_quiz::error::AppError;
use basecamp_quiz::quiz::QuizDefinition;
use chrono::Local;
use clap::Args;
use std::io::{self, Write};
use std::time::Duration;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardArgs {
    /// Keep redrawing the dashboard until interrupted
    #[arg(long)]
    pub(crate) watch: bool,
    /// Seconds between redraws in watch mode (defaults to QUIZ_DASHBOARD_REFRESH_SECS)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub(crate) interval: Option<u64>,
    /// Print the dashboard as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run_dashboard(config: &AppConfig, args: DashboardArgs) -> Result<(), AppError> {
    let quiz = QuizDefinition::standard();
    let log = open_event_log(&config.storage);
    let generator = DemoDataGenerator::new(config.demo.clone())?;
    let dashboard = Dashboard::new(&log, &quiz, generator);

    if !args.watch {
        return print_dashboard(&dashboard, args.json);
    }

    let period = args
        .interval
        .map(Duration::from_secs)
        .unwrap_or(config.dashboard.refresh_interval);
    let mut ticker = tokio::time::interval(period);
    info!(?period, "watching analytics dashboard");

    loop {
        tokio::select! {
            _ = ticker.tick() => print_dashboard(&dashboard, args.json)?,
            _ = tokio::signal::ctrl_c() => {
                info!("stopped watching analytics dashboard");
                return Ok(());
            }
        }
    }
}

fn print_dashboard<S: KeyValueStore>(dashboard: &Dashboard<'_, S>, json: bool) -> Result<(), AppError> {
    let view = dashboard.view(&Local::now());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        let body = serde_json::to_string_pretty(&view).map_err(io::Error::from)?;
        writeln!(out, "{body}")?;
    } else {
        render_dashboard(&view, &mut out)?;
    }
    Ok(())
}

pub(crate) fn render_dashboard<W: Write>(view: &DashboardView, out: &mut W) -> io::Result<()> {
    writeln!(out, "📊 Quiz Analytics")?;
    writeln!(out)?;
    for card in &view.metrics {
        writeln!(
            out,
            "  {:<14} {:>6}   +{} today",
            card.label, card.total, card.today
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Conversion")?;
    for rate in &view.rates {
        writeln!(
            out,
            "  {:<16} {:>3}%   {}",
            rate.label, rate.value, rate.description
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Personality Distribution")?;
    if !view.has_completions() {
        writeln!(out, "  No quiz completions yet.")?;
        return Ok(());
    }
    for row in &view.personality_breakdown {
        writeln!(
            out,
            "  {:<18} {:>5} {:>4}% {}",
            row.name,
            row.count,
            row.percentage,
            bar(row.percentage)
        )?;
    }
    Ok(())
}
