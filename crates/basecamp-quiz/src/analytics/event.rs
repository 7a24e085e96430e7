use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::quiz::PersonalityCategory;

/// Attribute key carrying the quiz outcome on completion, share and signup events.
pub const PERSONALITY_ATTRIBUTE: &str = "personality";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    QuizStart,
    QuizComplete,
    ShareClick,
    EmailSignup,
}

impl EventKind {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::QuizStart,
            Self::QuizComplete,
            Self::ShareClick,
            Self::EmailSignup,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::QuizStart => "Quiz Starts",
            Self::QuizComplete => "Completions",
            Self::ShareClick => "Shares",
            Self::EmailSignup => "Email Signups",
        }
    }
}

pub type EventAttributes = BTreeMap<String, String>;

/// One recorded interaction. Persisted as
/// `{"type": "...", "timestamp": "...", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub timestamp: DateTime<Utc>,
    #[serde(
        rename = "data",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub attributes: Option<EventAttributes>,
}

impl Event {
    pub fn new(kind: EventKind, timestamp: DateTime<Utc>, attributes: Option<EventAttributes>) -> Self {
        Self {
            kind,
            timestamp,
            attributes,
        }
    }

    /// Raw `personality` attribute, if any. Not validated against the
    /// known categories so that hand-edited logs still aggregate.
    pub fn personality(&self) -> Option<&str> {
        self.attributes
            .as_ref()
            .and_then(|attributes| attributes.get(PERSONALITY_ATTRIBUTE))
            .map(String::as_str)
    }
}

pub fn personality_attributes(category: PersonalityCategory) -> EventAttributes {
    EventAttributes::from([(PERSONALITY_ATTRIBUTE.to_string(), category.id().to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_in_browser_storage_shape() {
        let timestamp = Utc
            .with_ymd_and_hms(2025, 10, 3, 14, 30, 0)
            .single()
            .expect("valid timestamp");
        let event = Event::new(
            EventKind::QuizComplete,
            timestamp,
            Some(personality_attributes(PersonalityCategory::Explorer)),
        );

        let json = serde_json::to_value(&event).expect("event serializes");
        assert_eq!(json["type"], "quiz_complete");
        assert_eq!(json["timestamp"], "2025-10-03T14:30:00Z");
        assert_eq!(json["data"]["personality"], "explorer");
    }

    #[test]
    fn parses_event_without_data() {
        let raw = r#"{"type":"quiz_start","timestamp":"2025-10-03T09:15:22.123Z"}"#;
        let event: Event = serde_json::from_str(raw).expect("event parses");
        assert_eq!(event.kind, EventKind::QuizStart);
        assert!(event.attributes.is_none());
        assert!(event.personality().is_none());

        let json = serde_json::to_value(&event).expect("event serializes");
        assert!(json.get("data").is_none());
    }
}
