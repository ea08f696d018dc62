//! FundMatch - founder questionnaire engine and investor matching
//!
//! This library provides the quiz state machine that collects founder
//! preferences, the weighted investor scoring heuristic, persona parsing for
//! classification results, and a client for the FundMatch backend API.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchOutcome, QuizEngine, QuizError, QuestionSet, BonusSource, NoBonus, RandomBonus};
pub use models::{FounderProfile, InvestorRecord, MatchResult, Persona, Question, QuestionOption, ScoringWeights};
pub use services::{ApiClient, ApiError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let quiz = QuizEngine::from_set(crate::core::default_question_set()).unwrap();
        assert_eq!(quiz.progress(), 0.0);
        assert!(!quiz.can_request_match());
    }
}
