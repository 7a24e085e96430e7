use chrono::{DateTime, Duration, NaiveTime, Offset, TimeZone, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use super::event::{Event, EventKind};
use crate::percent::rounded_percentage;

/// Histogram bucket for completions that carry no personality attribute.
pub const UNKNOWN_PERSONALITY: &str = "unknown";

/// Event counts for one time window.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowCounts {
    pub starts: usize,
    pub completions: usize,
    pub shares: usize,
    pub signups: usize,
}

impl WindowCounts {
    fn record(&mut self, kind: EventKind) {
        match kind {
            EventKind::QuizStart => self.starts += 1,
            EventKind::QuizComplete => self.completions += 1,
            EventKind::ShareClick => self.shares += 1,
            EventKind::EmailSignup => self.signups += 1,
        }
    }

    pub fn count(&self, kind: EventKind) -> usize {
        match kind {
            EventKind::QuizStart => self.starts,
            EventKind::QuizComplete => self.completions,
            EventKind::ShareClick => self.shares,
            EventKind::EmailSignup => self.signups,
        }
    }
}

/// Funnel metrics derived from the full event log at one instant.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub all: WindowCounts,
    pub today: WindowCounts,
    pub week: WindowCounts,
    pub personality_counts: BTreeMap<String, usize>,
    pub completion_rate: u32,
    pub share_rate: u32,
    pub signup_rate: u32,
}

impl StatsSnapshot {
    /// Aggregates `events` relative to `now`. "Today" starts at midnight in
    /// `now`'s time zone; the week window reaches seven days before that.
    pub fn from_events<Tz: TimeZone>(events: &[Event], now: &DateTime<Tz>) -> Self {
        let today_start = start_of_day(now);
        let week_start = today_start - Duration::days(7);

        let mut snapshot = Self::default();
        for event in events {
            snapshot.all.record(event.kind);
            if event.timestamp >= today_start {
                snapshot.today.record(event.kind);
            }
            if event.timestamp >= week_start {
                snapshot.week.record(event.kind);
            }

            if event.kind == EventKind::QuizComplete {
                let bucket = event.personality().unwrap_or(UNKNOWN_PERSONALITY);
                *snapshot
                    .personality_counts
                    .entry(bucket.to_string())
                    .or_insert(0) += 1;
            }
        }

        let all = snapshot.all;
        snapshot.completion_rate = rounded_percentage(all.completions, all.starts);
        snapshot.share_rate = rounded_percentage(all.shares, all.completions);
        snapshot.signup_rate = rounded_percentage(all.signups, all.completions);
        snapshot
    }

    pub fn total_completions(&self) -> usize {
        self.personality_counts.values().sum()
    }
}

/// Local midnight of `now`'s calendar day as a UTC instant. When midnight
/// falls in a DST gap the current offset is applied to it instead.
pub fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Utc> {
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    match now.timezone().from_local_datetime(&midnight).earliest() {
        Some(start) => start.with_timezone(&Utc),
        None => Utc.from_utc_datetime(&(midnight - now.offset().fix())),
    }
}
