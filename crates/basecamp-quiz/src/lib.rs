//! Scoring and funnel analytics for the Basecamp coffee personality quiz.
//!
//! [`quiz`] holds the question set, the scoring engine and the respondent
//! session; [`analytics`] holds the persisted event log and everything
//! derived from it.

pub mod analytics;
pub mod config;
pub mod error;
mod percent;
pub mod quiz;
pub mod telemetry;

#[cfg(test)]
mod test_support;

pub use percent::rounded_percentage;
