//! Interaction event log and the funnel analytics derived from it.

mod dashboard;
mod demo;
pub mod event;
mod log;
pub mod stats;
pub mod store;

pub use dashboard::{Dashboard, DashboardView, MetricCard, PersonalityRow, RateCard, FALLBACK_COLOR};
pub use demo::{DemoConfigError, DemoDataConfig, DemoDataGenerator};
pub use event::{personality_attributes, Event, EventAttributes, EventKind, PERSONALITY_ATTRIBUTE};
pub use log::{EventLog, EVENT_LOG_KEY};
pub use stats::{StatsSnapshot, WindowCounts, UNKNOWN_PERSONALITY};
pub use store::{DetachedStore, FileStore, InMemoryStore, KeyValueStore, StoreError};
