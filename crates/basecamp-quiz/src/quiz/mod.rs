//! Quiz content, scoring, and the respondent-facing session flow.

mod definition;
pub mod domain;
pub mod scoring;
mod session;
pub mod share;

pub use definition::QuizDefinition;
pub use domain::{Answer, PersonalityCategory, PersonalityProfile, Question, UnknownCategory};
pub use scoring::{score, CategoryScore, ScoreDistribution, ScoringError};
pub use session::{ProfileScore, Progress, QuizError, QuizSession, QuizStage, ResultView};
pub use share::{deep_link_param, share_link, ShareLink, DEEP_LINK_PARAM};
