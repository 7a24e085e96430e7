use chrono::{DateTime, TimeZone};
use rand::Rng;
use serde::Serialize;
use tracing::info;

use super::demo::DemoDataGenerator;
use super::event::EventKind;
use super::log::EventLog;
use super::stats::StatsSnapshot;
use super::store::KeyValueStore;
use crate::percent::rounded_percentage;
use crate::quiz::{PersonalityCategory, QuizDefinition};

/// Bar color for histogram buckets that name no known personality.
pub const FALLBACK_COLOR: &str = "#9ca3af";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    pub label: &'static str,
    pub total: usize,
    pub today: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateCard {
    pub label: &'static str,
    pub value: u32,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalityRow {
    pub key: String,
    pub name: String,
    pub color: &'static str,
    pub count: usize,
    pub percentage: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub metrics: Vec<MetricCard>,
    pub rates: Vec<RateCard>,
    pub personality_breakdown: Vec<PersonalityRow>,
}

impl DashboardView {
    pub fn from_snapshot(snapshot: &StatsSnapshot, quiz: &QuizDefinition) -> Self {
        let metrics = EventKind::ordered()
            .into_iter()
            .map(|kind| MetricCard {
                label: kind.label(),
                total: snapshot.all.count(kind),
                today: snapshot.today.count(kind),
            })
            .collect();

        let rates = vec![
            RateCard {
                label: "Completion Rate",
                value: snapshot.completion_rate,
                description: "Started → Completed",
            },
            RateCard {
                label: "Share Rate",
                value: snapshot.share_rate,
                description: "Completed → Shared",
            },
            RateCard {
                label: "Signup Rate",
                value: snapshot.signup_rate,
                description: "Completed → Email",
            },
        ];

        let total = snapshot.total_completions();
        let mut personality_breakdown: Vec<PersonalityRow> = snapshot
            .personality_counts
            .iter()
            .map(|(key, &count)| {
                let (name, color) = match key.parse::<PersonalityCategory>() {
                    Ok(category) => {
                        let profile = quiz.profile(category);
                        (profile.name.to_string(), profile.color)
                    }
                    Err(_) => (key.clone(), FALLBACK_COLOR),
                };
                PersonalityRow {
                    key: key.clone(),
                    name,
                    color,
                    count,
                    percentage: rounded_percentage(count, total),
                }
            })
            .collect();
        // Keys arrive sorted from the BTreeMap, so a stable sort keeps ties alphabetical.
        personality_breakdown.sort_by(|a, b| b.count.cmp(&a.count));

        Self {
            metrics,
            rates,
            personality_breakdown,
        }
    }

    pub fn has_completions(&self) -> bool {
        !self.personality_breakdown.is_empty()
    }
}

/// Read side and demo controls of the analytics dashboard.
pub struct Dashboard<'a, S> {
    log: &'a EventLog<S>,
    quiz: &'a QuizDefinition,
    generator: DemoDataGenerator,
}

impl<'a, S: KeyValueStore> Dashboard<'a, S> {
    pub fn new(
        log: &'a EventLog<S>,
        quiz: &'a QuizDefinition,
        generator: DemoDataGenerator,
    ) -> Self {
        Self {
            log,
            quiz,
            generator,
        }
    }

    pub fn snapshot<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> StatsSnapshot {
        self.log.stats(now)
    }

    pub fn view<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> DashboardView {
        DashboardView::from_snapshot(&self.snapshot(now), self.quiz)
    }

    /// Replaces the whole log with a generated week of activity.
    pub fn load_demo_data<Tz: TimeZone, R: Rng + ?Sized>(
        &self,
        now: &DateTime<Tz>,
        rng: &mut R,
    ) -> usize {
        let events = self.generator.generate(now, rng);
        self.log.replace_all(&events);
        info!(events = events.len(), "loaded demo analytics data");
        events.len()
    }

    pub fn clear(&self) {
        self.log.clear();
        info!("cleared analytics data");
    }
}
