use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::Rng;

use super::event::{personality_attributes, Event, EventKind};
use super::stats::start_of_day;
use crate::quiz::PersonalityCategory;

/// Shape and policy knobs for synthetic dashboard data.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoDataConfig {
    pub days: u32,
    pub base_daily_starts: u32,
    pub daily_growth: u32,
    pub daily_jitter: u32,
    pub day_start_hour: u32,
    pub day_end_hour: u32,
    pub completion_probability: f64,
    pub share_probability: f64,
    pub signup_probability: f64,
}

impl Default for DemoDataConfig {
    fn default() -> Self {
        Self {
            days: 7,
            base_daily_starts: 8,
            daily_growth: 3,
            daily_jitter: 4,
            day_start_hour: 8,
            day_end_hour: 20,
            completion_probability: 0.85,
            share_probability: 0.35,
            signup_probability: 0.25,
        }
    }
}

impl DemoDataConfig {
    pub fn validate(&self) -> Result<(), DemoConfigError> {
        for (name, value) in [
            ("completion_probability", self.completion_probability),
            ("share_probability", self.share_probability),
            ("signup_probability", self.signup_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(DemoConfigError::Probability { name, value });
            }
        }

        if self.day_start_hour >= self.day_end_hour || self.day_end_hour > 24 {
            return Err(DemoConfigError::ActiveHours {
                start: self.day_start_hour,
                end: self.day_end_hour,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DemoConfigError {
    #[error("{name} must be between 0 and 1, got {value}")]
    Probability { name: &'static str, value: f64 },
    #[error("active hours {start}..{end} must satisfy start < end <= 24")]
    ActiveHours { start: u32, end: u32 },
}

const COMPLETION_DELAY_SECS: i64 = 60;
const SHARE_DELAY_SECS: i64 = 10;
const SIGNUP_DELAY_SECS: i64 = 20;

#[derive(Debug, Clone, Default)]
pub struct DemoDataGenerator {
    config: DemoDataConfig,
}

impl DemoDataGenerator {
    pub fn new(config: DemoDataConfig) -> Result<Self, DemoConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DemoDataConfig {
        &self.config
    }

    /// Builds a week of funnel activity ending on `now`'s calendar day,
    /// oldest day first, with daily volume growing toward today.
    pub fn generate<Tz: TimeZone, R: Rng + ?Sized>(
        &self,
        now: &DateTime<Tz>,
        rng: &mut R,
    ) -> Vec<Event> {
        let config = &self.config;
        let today_start = start_of_day(now);
        let window_start = i64::from(config.day_start_hour) * 3600;
        let window_end = i64::from(config.day_end_hour) * 3600;

        let mut events = Vec::new();
        for day_index in 0..config.days {
            let days_ago = i64::from(config.days - 1 - day_index);
            let day_start = today_start - Duration::days(days_ago);
            let starts = config.base_daily_starts
                + day_index * config.daily_growth
                + rng.gen_range(0..=config.daily_jitter);

            for _ in 0..starts {
                let offset = Duration::seconds(rng.gen_range(window_start..window_end));
                let started_at = day_start + offset;
                events.push(Event::new(EventKind::QuizStart, started_at, None));

                if !rng.gen_bool(config.completion_probability) {
                    continue;
                }
                let completed_at = started_at + Duration::seconds(COMPLETION_DELAY_SECS);
                self.push_outcome(&mut events, completed_at, &mut *rng);
            }
        }

        // Random times within a day are drawn out of order.
        events.sort_by_key(|event| event.timestamp);
        events
    }

    fn push_outcome<R: Rng + ?Sized>(
        &self,
        events: &mut Vec<Event>,
        completed_at: DateTime<Utc>,
        rng: &mut R,
    ) {
        let categories = PersonalityCategory::ordered();
        let category = categories[rng.gen_range(0..categories.len())];
        let attributes = personality_attributes(category);

        events.push(Event::new(
            EventKind::QuizComplete,
            completed_at,
            Some(attributes.clone()),
        ));
        if rng.gen_bool(self.config.share_probability) {
            events.push(Event::new(
                EventKind::ShareClick,
                completed_at + Duration::seconds(SHARE_DELAY_SECS),
                Some(attributes.clone()),
            ));
        }
        if rng.gen_bool(self.config.signup_probability) {
            events.push(Event::new(
                EventKind::EmailSignup,
                completed_at + Duration::seconds(SIGNUP_DELAY_SECS),
                Some(attributes),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::stats::StatsSnapshot;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 10, 21, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn generated_events_are_chronological_and_span_the_week() {
        let generator = DemoDataGenerator::default();
        let mut rng = StdRng::seed_from_u64(7);
        let events = generator.generate(&now(), &mut rng);

        assert!(events
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp));

        let first = events.first().expect("events generated");
        let today_start = start_of_day(&now());
        assert!(first.timestamp >= today_start - Duration::days(6));
        assert!(events.iter().all(|event| event.timestamp < today_start + Duration::days(1)));

        let snapshot = StatsSnapshot::from_events(&events, &now());
        assert_eq!(snapshot.week, snapshot.all);
        assert!(snapshot.today.starts >= 8 + 6 * 3);
        assert!(snapshot.all.completions <= snapshot.all.starts);
    }

    #[test]
    fn probabilities_of_one_and_zero_are_honoured() {
        let generator = DemoDataGenerator::new(DemoDataConfig {
            completion_probability: 1.0,
            share_probability: 1.0,
            signup_probability: 0.0,
            daily_jitter: 0,
            ..DemoDataConfig::default()
        })
        .expect("valid demo config");
        let mut rng = StdRng::seed_from_u64(42);
        let events = generator.generate(&now(), &mut rng);

        let snapshot = StatsSnapshot::from_events(&events, &now());
        let expected_starts: usize = (0..7).map(|day| 8 + day * 3).sum();
        assert_eq!(snapshot.all.starts, expected_starts);
        assert_eq!(snapshot.all.completions, expected_starts);
        assert_eq!(snapshot.all.shares, expected_starts);
        assert_eq!(snapshot.all.signups, 0);
        assert!(!snapshot.personality_counts.contains_key("unknown"));
    }

    #[test]
    fn outcomes_share_the_completion_category() {
        let generator = DemoDataGenerator::new(DemoDataConfig {
            completion_probability: 1.0,
            share_probability: 1.0,
            signup_probability: 1.0,
            days: 1,
            base_daily_starts: 1,
            daily_jitter: 0,
            ..DemoDataConfig::default()
        })
        .expect("valid demo config");
        let mut rng = StdRng::seed_from_u64(1);
        let events = generator.generate(&now(), &mut rng);

        let kinds: Vec<_> = events.iter().map(|event| event.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::QuizStart,
                EventKind::QuizComplete,
                EventKind::ShareClick,
                EventKind::EmailSignup,
            ]
        );
        let personality = events[1].personality().expect("completion tagged");
        assert!(events[2..]
            .iter()
            .all(|event| event.personality() == Some(personality)));
        assert_eq!(events[1].timestamp - events[0].timestamp, Duration::minutes(1));
    }

    #[test]
    fn rejects_probabilities_outside_unit_range() {
        let err = DemoDataGenerator::new(DemoDataConfig {
            share_probability: 1.5,
            ..DemoDataConfig::default()
        })
        .expect_err("share probability above 1 rejected");
        assert_eq!(
            err,
            DemoConfigError::Probability {
                name: "share_probability",
                value: 1.5
            }
        );

        assert!(DemoDataGenerator::new(DemoDataConfig {
            completion_probability: f64::NAN,
            ..DemoDataConfig::default()
        })
        .is_err());
    }

    #[test]
    fn rejects_empty_or_overflowing_active_hours() {
        for (start, end) in [(20, 8), (9, 9), (8, 25)] {
            let result = DemoDataGenerator::new(DemoDataConfig {
                day_start_hour: start,
                day_end_hour: end,
                ..DemoDataConfig::default()
            });
            assert!(
                matches!(result, Err(DemoConfigError::ActiveHours { .. })),
                "{start}..{end} accepted"
            );
        }
    }
}
