use serde::Serialize;
use tracing::{debug, info};

use super::definition::QuizDefinition;
use super::domain::{PersonalityCategory, PersonalityProfile, Question};
use super::scoring::{score, ScoreDistribution, ScoringError};
use super::share::{share_link, ShareLink};
use crate::analytics::{personality_attributes, EventKind, EventLog, KeyValueStore};
use crate::config::ShareConfig;
use crate::percent::rounded_percentage;

/// Screen the respondent is currently on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum QuizStage {
    Welcome,
    Answering {
        question_index: usize,
    },
    Results {
        distribution: ScoreDistribution,
        shared: bool,
    },
}

impl QuizStage {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Answering { .. } => "quiz",
            Self::Results { .. } => "results",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("cannot {action} on the {stage} screen")]
    WrongStage {
        action: &'static str,
        stage: &'static str,
    },
    #[error("question {question} has no answer #{choice}")]
    ChoiceOutOfRange { question: u8, choice: usize },
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub number: usize,
    pub total: usize,
    pub percent: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileScore<'q> {
    pub profile: &'q PersonalityProfile,
    pub percentage: u32,
}

/// Everything the results screen renders.
#[derive(Debug, Clone, Serialize)]
pub struct ResultView<'q> {
    pub profile: &'q PersonalityProfile,
    pub scores: Vec<ProfileScore<'q>>,
    pub shared: bool,
}

/// Drives one respondent through welcome → questions → results and records
/// the funnel events along the way.
pub struct QuizSession<'a, S> {
    quiz: &'a QuizDefinition,
    log: &'a EventLog<S>,
    stage: QuizStage,
    answers: Vec<PersonalityCategory>,
}

impl<'a, S: KeyValueStore> QuizSession<'a, S> {
    pub fn new(quiz: &'a QuizDefinition, log: &'a EventLog<S>) -> Self {
        Self {
            quiz,
            log,
            stage: QuizStage::Welcome,
            answers: Vec::with_capacity(quiz.question_count()),
        }
    }

    /// Opens straight onto a shared result when `param` names a category.
    /// Anything else lands on the welcome screen.
    pub fn from_deep_link(
        quiz: &'a QuizDefinition,
        log: &'a EventLog<S>,
        param: Option<&str>,
    ) -> Self {
        let mut session = Self::new(quiz, log);
        let Some(raw) = param else {
            return session;
        };

        match raw.parse::<PersonalityCategory>() {
            Ok(category) => {
                session.stage = QuizStage::Results {
                    distribution: ScoreDistribution::shared_link(category),
                    shared: true,
                };
            }
            Err(err) => debug!(error = %err, "ignoring deep link"),
        }
        session
    }

    pub fn stage(&self) -> &QuizStage {
        &self.stage
    }

    pub fn answers(&self) -> &[PersonalityCategory] {
        &self.answers
    }

    pub fn start(&mut self) {
        self.answers.clear();
        self.stage = QuizStage::Answering { question_index: 0 };
        self.log.append(EventKind::QuizStart, None);
    }

    pub fn current_question(&self) -> Option<&'a Question> {
        match self.stage {
            QuizStage::Answering { question_index } => self.quiz.question(question_index),
            _ => None,
        }
    }

    pub fn progress(&self) -> Option<Progress> {
        let QuizStage::Answering { question_index } = self.stage else {
            return None;
        };
        let total = self.quiz.question_count();
        let number = question_index + 1;
        Some(Progress {
            number,
            total,
            percent: rounded_percentage(number, total),
        })
    }

    /// Records the answer in slot `choice` of the current question. The
    /// last answer scores the quiz and moves to the results screen.
    pub fn answer(&mut self, choice: usize) -> Result<&QuizStage, QuizError> {
        let question = self.current_question().ok_or(QuizError::WrongStage {
            action: "answer a question",
            stage: self.stage.label(),
        })?;
        let picked = question
            .answer(choice)
            .ok_or(QuizError::ChoiceOutOfRange {
                question: question.id,
                choice,
            })?
            .personality;

        self.answers.push(picked);
        let next_index = self.answers.len();
        if next_index < self.quiz.question_count() {
            self.stage = QuizStage::Answering {
                question_index: next_index,
            };
            return Ok(&self.stage);
        }

        let distribution = score(&self.answers)?;
        let top = distribution.top();
        self.log
            .append(EventKind::QuizComplete, Some(personality_attributes(top.category)));
        info!(personality = %top.category, percentage = top.percentage, "quiz completed");

        self.stage = QuizStage::Results {
            distribution,
            shared: false,
        };
        Ok(&self.stage)
    }

    pub fn retake(&mut self) {
        self.answers.clear();
        self.stage = QuizStage::Welcome;
    }

    pub fn result(&self) -> Option<ResultView<'a>> {
        let QuizStage::Results {
            distribution,
            shared,
        } = &self.stage
        else {
            return None;
        };

        let scores = distribution
            .entries()
            .iter()
            .map(|entry| ProfileScore {
                profile: self.quiz.profile(entry.category),
                percentage: entry.percentage,
            })
            .collect();

        Some(ResultView {
            profile: self.quiz.profile(distribution.top().category),
            scores,
            shared: *shared,
        })
    }

    pub fn share(&self, config: &ShareConfig) -> Result<ShareLink, QuizError> {
        let category = self.result_category("share a result")?;
        self.log
            .append(EventKind::ShareClick, Some(personality_attributes(category)));
        Ok(share_link(self.quiz.profile(category), config))
    }

    /// Captures an email signup. Only the personality is recorded; the
    /// address itself is validated and dropped.
    pub fn sign_up(&self, email: &str) -> Result<(), QuizError> {
        let category = self.result_category("sign up")?;
        if !is_plausible_email(email) {
            return Err(QuizError::InvalidEmail(email.to_string()));
        }

        self.log
            .append(EventKind::EmailSignup, Some(personality_attributes(category)));
        Ok(())
    }

    fn result_category(&self, action: &'static str) -> Result<PersonalityCategory, QuizError> {
        match &self.stage {
            QuizStage::Results { distribution, .. } => Ok(distribution.top().category),
            other => Err(QuizError::WrongStage {
                action,
                stage: other.label(),
            }),
        }
    }
}

fn is_plausible_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
