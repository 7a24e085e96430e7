use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four coffee personalities, in canonical order. Ranking ties fall back
/// to this declaration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityCategory {
    Explorer,
    Classic,
    Adventurer,
    Mindful,
}

impl PersonalityCategory {
    pub const fn ordered() -> [Self; 4] {
        [Self::Explorer, Self::Classic, Self::Adventurer, Self::Mindful]
    }

    /// Stable identifier used in persisted events and deep links.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Explorer => "explorer",
            Self::Classic => "classic",
            Self::Adventurer => "adventurer",
            Self::Mindful => "mindful",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Explorer => 0,
            Self::Classic => 1,
            Self::Adventurer => 2,
            Self::Mindful => 3,
        }
    }
}

impl fmt::Display for PersonalityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PersonalityCategory {
    type Err = UnknownCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|category| category.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownCategory(raw.to_string()))
    }
}

/// A category reference (deep link, CLI flag) that names no known personality.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown personality category '{0}'")]
pub struct UnknownCategory(pub String);

#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub text: &'static str,
    pub emoji: &'static str,
    pub personality: PersonalityCategory,
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: u8,
    pub prompt: &'static str,
    pub emoji: &'static str,
    pub answers: [Answer; 4],
}

impl Question {
    pub fn answer(&self, choice: usize) -> Option<&Answer> {
        self.answers.get(choice)
    }
}

/// Reference copy for one personality's result card.
#[derive(Debug, Clone, Serialize)]
pub struct PersonalityProfile {
    pub category: PersonalityCategory,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub drink: &'static str,
    pub drink_description: &'static str,
    pub image: &'static str,
    pub color: &'static str,
}
