use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::analytics::DemoDataConfig;

/// Distinguishes runtime behavior for different stages of the quiz host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the quiz host.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub storage: StorageConfig,
    pub telemetry: TelemetryConfig,
    pub share: ShareConfig,
    pub dashboard: DashboardConfig,
    pub demo: DemoDataConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("QUIZ_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let data_dir = env::var("QUIZ_DATA_DIR").unwrap_or_else(|_| ".basecamp".to_string());
        let log_level = env::var("QUIZ_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let share_url = env::var("QUIZ_SHARE_URL")
            .unwrap_or_else(|_| "https://basecamp.coffee/quiz".to_string());

        let refresh_secs = env::var("QUIZ_DASHBOARD_REFRESH_SECS")
            .unwrap_or_else(|_| "5".to_string())
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or(ConfigError::InvalidRefreshInterval)?;

        let defaults = DemoDataConfig::default();
        let demo = DemoDataConfig {
            completion_probability: probability_var(
                "QUIZ_DEMO_COMPLETION_RATE",
                defaults.completion_probability,
            )?,
            share_probability: probability_var("QUIZ_DEMO_SHARE_RATE", defaults.share_probability)?,
            signup_probability: probability_var(
                "QUIZ_DEMO_SIGNUP_RATE",
                defaults.signup_probability,
            )?,
            ..defaults
        };

        Ok(Self {
            environment,
            storage: StorageConfig {
                data_dir: PathBuf::from(data_dir),
            },
            telemetry: TelemetryConfig { log_level },
            share: ShareConfig {
                base_url: share_url,
            },
            dashboard: DashboardConfig {
                refresh_interval: Duration::from_secs(refresh_secs),
            },
            demo,
        })
    }
}

fn probability_var(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    let raw = match env::var(name) {
        Ok(raw) => raw,
        Err(_) => return Ok(default),
    };

    match raw.trim().parse::<f64>() {
        Ok(value) if (0.0..=1.0).contains(&value) => Ok(value),
        _ => Err(ConfigError::InvalidProbability { name, value: raw }),
    }
}

/// Where the event log is persisted on disk.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Base address used for share links and deep links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareConfig {
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub refresh_interval: Duration,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidRefreshInterval,
    InvalidProbability { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRefreshInterval => {
                write!(f, "QUIZ_DASHBOARD_REFRESH_SECS must be a positive integer")
            }
            ConfigError::InvalidProbability { name, value } => {
                write!(f, "{name} must be a number between 0 and 1 (got '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
