use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::event::{Event, EventAttributes, EventKind};
use super::stats::StatsSnapshot;
use super::store::KeyValueStore;

/// Key under which the whole event sequence is persisted.
pub const EVENT_LOG_KEY: &str = "basecamp_analytics";

/// Append-only interaction log persisted as one JSON array.
///
/// Every read re-parses the persisted form; nothing is cached between calls.
/// Storage failures never reach the caller: an unreadable or corrupt entry
/// reads as an empty log and failed writes are logged and dropped. Records
/// this version does not recognise are preserved across appends.
#[derive(Debug, Clone)]
pub struct EventLog<S> {
    store: S,
}

impl<S: KeyValueStore> EventLog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn append(&self, kind: EventKind, attributes: Option<EventAttributes>) {
        self.append_at(kind, attributes, Utc::now());
    }

    pub fn append_at(
        &self,
        kind: EventKind,
        attributes: Option<EventAttributes>,
        timestamp: DateTime<Utc>,
    ) {
        let mut records = self.read_records();
        match serde_json::to_value(Event::new(kind, timestamp, attributes)) {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!(error = %err, "failed to serialize quiz event");
                return;
            }
        }
        self.persist(&records);
        debug!(?kind, total = records.len(), "recorded quiz event");
    }

    /// Every record that decodes as an [`Event`]. Records of unknown kinds
    /// stay in storage but are skipped here.
    pub fn read_all(&self) -> Vec<Event> {
        self.read_records()
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(event) => Some(event),
                Err(err) => {
                    warn!(index, error = %err, "skipping unrecognised event record");
                    None
                }
            })
            .collect()
    }

    /// Raw persisted records. Only a document that is not a JSON array
    /// counts as corrupt.
    fn read_records(&self) -> Vec<Value> {
        let raw = match self.store.get(EVENT_LOG_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(error = %err, "event log unreadable; treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                warn!(error = %err, "persisted event log is corrupt; treating as empty");
                Vec::new()
            }
        }
    }

    pub fn clear(&self) {
        if let Err(err) = self.store.delete(EVENT_LOG_KEY) {
            warn!(error = %err, "failed to clear event log");
        }
    }

    /// Overwrites the whole log. Used for demo seeding, never by the quiz flow.
    pub fn replace_all(&self, events: &[Event]) {
        self.persist(events);
    }

    pub fn stats<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> StatsSnapshot {
        StatsSnapshot::from_events(&self.read_all(), now)
    }

    fn persist<T: Serialize + ?Sized>(&self, records: &T) {
        let serialized = match serde_json::to_string(records) {
            Ok(serialized) => serialized,
            Err(err) => {
                warn!(error = %err, "failed to serialize event log");
                return;
            }
        };

        if let Err(err) = self.store.set(EVENT_LOG_KEY, &serialized) {
            warn!(error = %err, "failed to persist event log");
        }
    }
}
