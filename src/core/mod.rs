// Core algorithm exports
pub mod catalog;
pub mod matcher;
pub mod persona;
pub mod quiz;
pub mod scoring;

pub use catalog::{default_investors, default_question_set, funding_stages, industries};
pub use matcher::{Matcher, MatchOutcome};
pub use persona::{parse_classification, parse_persona_text, strip_code_fence};
pub use quiz::{QuizEngine, QuizError, QuestionSet, Selection, Step, MIN_QUESTIONS_FOR_MATCH};
pub use scoring::{score_investor, range_fit, RangeFit, BonusSource, NoBonus, AlwaysBonus, RandomBonus};
