use super::domain::PersonalityCategory::{Adventurer, Classic, Explorer, Mindful};
use super::domain::{Answer, PersonalityCategory, PersonalityProfile, Question};

/// Questions and result profiles for one quiz.
#[derive(Debug)]
pub struct QuizDefinition {
    questions: Vec<Question>,
    profiles: [PersonalityProfile; 4],
}

impl QuizDefinition {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
            profiles: standard_profiles(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn profile(&self, category: PersonalityCategory) -> &PersonalityProfile {
        &self.profiles[category.index()]
    }

    pub fn profiles(&self) -> &[PersonalityProfile] {
        &self.profiles
    }
}

const fn answer(
    text: &'static str,
    emoji: &'static str,
    personality: PersonalityCategory,
) -> Answer {
    Answer {
        text,
        emoji,
        personality,
    }
}

fn standard_questions() -> Vec<Question> {
    vec![
        Question {
            id: 1,
            prompt: "It's Saturday morning. What's your ideal start?",
            emoji: "🌅",
            answers: [
                answer("Quiet reading with coffee", "📚", Mindful),
                answer("Hitting my favorite cafe", "☕", Classic),
                answer("Trying a new coffee spot", "🗺️", Explorer),
                answer("Adventure first, caffeine later", "🏃", Adventurer),
            ],
        },
        Question {
            id: 2,
            prompt: "A friend asks for a coffee recommendation. You suggest...",
            emoji: "💬",
            answers: [
                answer("The same thing I always get", "⭐", Classic),
                answer("Something new I just discovered", "🔍", Explorer),
                answer("Whatever matches their vibe", "🎯", Mindful),
                answer("The most unique thing on the menu", "🌟", Adventurer),
            ],
        },
        Question {
            id: 3,
            prompt: "How do you feel about trying new coffee drinks?",
            emoji: "🧪",
            answers: [
                answer("Love it! Variety is the spice of life", "🎉", Adventurer),
                answer("Occasionally, if it sounds interesting", "🤔", Explorer),
                answer("I like what I like", "👍", Classic),
                answer("Depends on my mood that day", "🌙", Mindful),
            ],
        },
        Question {
            id: 4,
            prompt: "Your perfect coffee moment is...",
            emoji: "✨",
            answers: [
                answer("Quiet contemplation alone", "🧘", Mindful),
                answer("Chatting with a friendly barista", "👋", Explorer),
                answer("Comfortable and predictable", "🛋️", Classic),
                answer("Part of an exciting outing", "🎒", Adventurer),
            ],
        },
        Question {
            id: 5,
            prompt: "When choosing where to sit in a coffee shop, you prefer...",
            emoji: "🪑",
            answers: [
                answer("My usual spot", "📍", Classic),
                answer("Somewhere with a good view", "🌳", Mindful),
                answer("Near the action", "👀", Explorer),
                answer("Wherever looks fun today", "🎲", Adventurer),
            ],
        },
        Question {
            id: 6,
            prompt: "What matters most to you in a coffee experience?",
            emoji: "❤️",
            answers: [
                answer("Consistency and quality", "💯", Classic),
                answer("Discovery and learning", "📖", Explorer),
                answer("Peace and presence", "🕊️", Mindful),
                answer("Fun and spontaneity", "🎈", Adventurer),
            ],
        },
    ]
}

// Indexed by `PersonalityCategory::index`.
fn standard_profiles() -> [PersonalityProfile; 4] {
    [
        PersonalityProfile {
            category: Explorer,
            name: "Espresso Explorer",
            tagline: "Always curious, never boring",
            description: "You love discovering new flavors and learning about coffee origins. Every cup is an opportunity to explore something new.",
            drink: "Single-Origin Espresso",
            drink_description: "Try our rotating single-origin shots to satisfy your curious palate",
            image: "/images/espresso.jpg",
            color: "#e57373",
        },
        PersonalityProfile {
            category: Classic,
            name: "Classic Comfort",
            tagline: "Reliable, refined, always right",
            description: "You know what you like and you stick with it. There's beauty in consistency and you appreciate quality over novelty.",
            drink: "House Drip Coffee",
            drink_description: "Our perfectly balanced house blend, crafted for everyday excellence",
            image: "/images/drip-coffee.jpg",
            color: "#8d6e63",
        },
        PersonalityProfile {
            category: Adventurer,
            name: "Bold Adventurer",
            tagline: "Life's too short for boring coffee",
            description: "You embrace the unexpected and love when coffee surprises you. Seasonal specials and limited editions are your thing.",
            drink: "Caramel Hazelnut Latte",
            drink_description: "Our most creative seasonal creation with unexpected flavor twists",
            image: "/images/caramel-latte.jpg",
            color: "#ffb74d",
        },
        PersonalityProfile {
            category: Mindful,
            name: "Mindful Sipper",
            tagline: "Present in every pour",
            description: "Coffee is your moment of calm. You savor each sip and appreciate the ritual as much as the drink itself.",
            drink: "Oat Milk Americano",
            drink_description: "Smooth, simple, and perfect for savoring slowly",
            image: "/images/oat-milk-americano.jpg",
            color: "#81c784",
        },
    ]
}
