use crate::infra::open_event_log;
use basecamp_quiz::analytics::{Dashboard, DemoDataGenerator};
use basecamp_quiz::config::AppConfig;
use basecamp_quiz::error::AppError;
use basecamp_quiz::quiz::QuizDefinition;
use chrono::Local;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Args, Debug, Default)]
pub(crate) struct SeedArgs {
    /// Seed for reproducible demo data. Random when omitted.
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

pub(crate) fn seed_demo_data(config: &AppConfig, args: SeedArgs) -> Result<(), AppError> {
    let quiz = QuizDefinition::standard();
    let log = open_event_log(&config.storage);
    let generator = DemoDataGenerator::new(config.demo.clone())?;
    let dashboard = Dashboard::new(&log, &quiz, generator);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let loaded = dashboard.load_demo_data(&Local::now(), &mut rng);

    println!(
        "Loaded {loaded} demo events into {}",
        config.storage.data_dir.display()
    );
    Ok(())
}

pub(crate) fn clear_demo_data(config: &AppConfig) -> Result<(), AppError> {
    let quiz = QuizDefinition::standard();
    let log = open_event_log(&config.storage);
    let generator = DemoDataGenerator::new(config.demo.clone())?;
    Dashboard::new(&log, &quiz, generator).clear();

    println!(
        "Cleared analytics data in {}",
        config.storage.data_dir.display()
    );
    Ok(())
}
