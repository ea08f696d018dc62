use crate::models::{ClassifyRequest, FounderProfile, Question};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use thiserror::Error;

/// Minimum answers before a match can be requested in the default quiz
pub const MIN_QUESTIONS_FOR_MATCH: usize = 7;

/// Errors raised by the quiz engine
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Question set is empty")]
    EmptyQuestionSet,

    #[error("Duplicate question id: {0}")]
    DuplicateQuestion(String),

    #[error("Question {0} has no options")]
    NoOptions(String),

    #[error("Minimum of {min} answers exceeds the {total} available questions")]
    InvalidMinimum { min: usize, total: usize },

    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    #[error("Unknown option {value:?} for question {question_id}")]
    UnknownOption { question_id: String, value: String },

    #[error("Question index {index} out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Please answer at least {required} questions to see your match.")]
    InsufficientAnswers { answered: usize, required: usize },

    #[error("Answers do not determine {0}")]
    MissingPreference(&'static str),

    #[error("Failed to read question set: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse question set: {0}")]
    Toml(#[from] toml::de::Error),
}

/// A quiz variant: its questions and the answers needed before matching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSet {
    #[serde(default = "default_min_questions")]
    pub min_questions: usize,
    pub questions: Vec<Question>,
}

fn default_min_questions() -> usize {
    MIN_QUESTIONS_FOR_MATCH
}

impl QuestionSet {
    pub fn from_toml_str(source: &str) -> Result<Self, QuizError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

/// Result of a select action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Selected,
    Deselected,
}

/// Where the quiz stands after moving forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Display the question at this index
    Question(usize),
    /// Every question has been passed; request the match result
    RequestMatch,
}

/// Quiz state machine
///
/// Owns the answer set and navigation history. Answers are single-choice and
/// keyed by question id; `progress` depends only on the answers, never on the
/// current position, since the sidebar allows answering out of order.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Vec<Question>,
    min_questions: usize,
    answers: BTreeMap<String, String>,
    history: Vec<usize>,
    current: usize,
}

impl QuizEngine {
    pub fn new(questions: Vec<Question>, min_questions: usize) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id.as_str()) {
                return Err(QuizError::DuplicateQuestion(question.id.clone()));
            }
            if question.options.is_empty() {
                return Err(QuizError::NoOptions(question.id.clone()));
            }
        }

        if min_questions > questions.len() {
            return Err(QuizError::InvalidMinimum {
                min: min_questions,
                total: questions.len(),
            });
        }

        Ok(Self {
            questions,
            min_questions,
            answers: BTreeMap::new(),
            history: Vec::new(),
            current: 0,
        })
    }

    pub fn from_set(set: QuestionSet) -> Result<Self, QuizError> {
        Self::new(set.questions, set.min_questions)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &BTreeMap<String, String> {
        &self.answers
    }

    pub fn answer(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    pub fn history(&self) -> &[usize] {
        &self.history
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn min_questions(&self) -> usize {
        self.min_questions
    }

    /// The question at the current index, `None` once past the last question
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// Toggle an answer. Selecting the already-selected value clears it;
    /// any other value replaces the previous selection.
    pub fn select_option(&mut self, question_id: &str, value: &str) -> Result<Selection, QuizError> {
        let question = self
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .ok_or_else(|| QuizError::UnknownQuestion(question_id.to_string()))?;

        if question.option(value).is_none() {
            return Err(QuizError::UnknownOption {
                question_id: question_id.to_string(),
                value: value.to_string(),
            });
        }

        let selection = if self.answer(question_id) == Some(value) {
            self.answers.remove(question_id);
            Selection::Deselected
        } else {
            self.answers.insert(question_id.to_string(), value.to_string());
            Selection::Selected
        };

        tracing::debug!(
            "{:?} {}={} ({} of {} answered)",
            selection,
            question_id,
            value,
            self.answered_count(),
            self.questions.len()
        );

        Ok(selection)
    }

    /// Move to the next question, or signal that a match should be requested
    pub fn advance(&mut self) -> Step {
        if self.is_complete() {
            return Step::RequestMatch;
        }

        self.push_history();
        self.current += 1;

        if self.is_complete() {
            tracing::debug!("All questions visited, requesting match");
            Step::RequestMatch
        } else {
            Step::Question(self.current)
        }
    }

    /// Return to the previously visited question. Always uses the history
    /// stack, since jumps make `current - 1` meaningless.
    pub fn retreat(&mut self) -> usize {
        self.current = self.history.pop().unwrap_or(0);
        self.current
    }

    /// Sidebar navigation to an arbitrary question
    pub fn jump_to(&mut self, index: usize) -> Result<(), QuizError> {
        if index >= self.questions.len() {
            return Err(QuizError::IndexOutOfRange {
                index,
                len: self.questions.len(),
            });
        }

        self.push_history();
        self.current = index;
        Ok(())
    }

    fn push_history(&mut self) {
        if self.history.last() != Some(&self.current) {
            self.history.push(self.current);
        }
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Percentage of questions answered, 0.0 to 100.0
    pub fn progress(&self) -> f64 {
        self.answered_count() as f64 / self.questions.len() as f64 * 100.0
    }

    pub fn can_request_match(&self) -> bool {
        self.answered_count() >= self.min_questions
    }

    pub fn ensure_match_ready(&self) -> Result<(), QuizError> {
        if self.can_request_match() {
            Ok(())
        } else {
            Err(QuizError::InsufficientAnswers {
                answered: self.answered_count(),
                required: self.min_questions,
            })
        }
    }

    /// Preference facts of all selected options, merged in question order
    pub fn preferences(&self) -> BTreeMap<String, String> {
        let mut merged = BTreeMap::new();
        for question in &self.questions {
            let selected = self
                .answers
                .get(&question.id)
                .and_then(|value| question.option(value));
            if let Some(option) = selected {
                merged.extend(option.preference.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }
        merged
    }

    /// Answers as prompt -> option text, the form sent for classification
    pub fn formatted_answers(&self) -> BTreeMap<String, String> {
        self.questions
            .iter()
            .filter_map(|question| {
                let value = self.answers.get(&question.id)?;
                let option = question.option(value)?;
                Some((question.prompt.clone(), option.text.clone()))
            })
            .collect()
    }

    pub fn classify_request(&self, goal: &str) -> Result<ClassifyRequest, QuizError> {
        self.ensure_match_ready()?;
        Ok(ClassifyRequest {
            questionnaire_results: self.formatted_answers(),
            classification_goal: goal.to_string(),
        })
    }

    /// Build a founder profile from the aggregate preferences
    pub fn founder_profile(
        &self,
        company_name: &str,
        investment_amount: u64,
    ) -> Result<FounderProfile, QuizError> {
        let prefs = self.preferences();
        let take = |key: &'static str| {
            prefs
                .get(key)
                .cloned()
                .ok_or(QuizError::MissingPreference(key))
        };

        Ok(FounderProfile {
            industry: take("industry")?,
            funding_stage: take("fundingStage")?,
            risk_tolerance: take("riskTolerance")?,
            investment_amount,
            company_name: company_name.to_string(),
        })
    }

    pub fn reset(&mut self) {
        self.answers.clear();
        self.history.clear();
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionOption;

    fn question(id: &str, values: &[&str]) -> Question {
        Question {
            id: id.to_string(),
            prompt: format!("Prompt {}", id),
            options: values
                .iter()
                .map(|v| QuestionOption {
                    text: format!("Option {}", v),
                    value: v.to_string(),
                    preference: BTreeMap::from([(id.to_string(), v.to_string())]),
                })
                .collect(),
            scrollable: false,
        }
    }

    fn engine(n: usize, min: usize) -> QuizEngine {
        let questions = (0..n).map(|i| question(&format!("q{}", i), &["a", "b"])).collect();
        QuizEngine::new(questions, min).unwrap()
    }

    #[test]
    fn test_rejects_invalid_question_sets() {
        assert!(matches!(QuizEngine::new(vec![], 0), Err(QuizError::EmptyQuestionSet)));

        let dup = vec![question("q", &["a"]), question("q", &["b"])];
        assert!(matches!(QuizEngine::new(dup, 1), Err(QuizError::DuplicateQuestion(_))));

        let empty = vec![question("q", &[])];
        assert!(matches!(QuizEngine::new(empty, 1), Err(QuizError::NoOptions(_))));

        let few = vec![question("q", &["a"])];
        assert!(matches!(QuizEngine::new(few, 2), Err(QuizError::InvalidMinimum { .. })));
    }

    #[test]
    fn test_select_toggles_and_replaces() {
        let mut quiz = engine(3, 2);

        assert_eq!(quiz.select_option("q0", "a").unwrap(), Selection::Selected);
        assert_eq!(quiz.answer("q0"), Some("a"));

        // Replacing keeps a single answer per question
        quiz.select_option("q0", "b").unwrap();
        assert_eq!(quiz.answer("q0"), Some("b"));
        assert_eq!(quiz.answered_count(), 1);

        // Same value again clears it
        assert_eq!(quiz.select_option("q0", "b").unwrap(), Selection::Deselected);
        assert_eq!(quiz.answer("q0"), None);
        assert_eq!(quiz.answered_count(), 0);
    }

    #[test]
    fn test_select_unknown_question_or_option() {
        let mut quiz = engine(2, 1);
        assert!(matches!(quiz.select_option("nope", "a"), Err(QuizError::UnknownQuestion(_))));
        assert!(matches!(quiz.select_option("q0", "z"), Err(QuizError::UnknownOption { .. })));
        assert_eq!(quiz.answered_count(), 0);
    }

    #[test]
    fn test_progress_ignores_position() {
        let mut quiz = engine(4, 2);
        quiz.jump_to(3).unwrap();
        quiz.select_option("q3", "a").unwrap();
        quiz.select_option("q1", "b").unwrap();

        assert_eq!(quiz.progress(), 50.0);
        quiz.retreat();
        assert_eq!(quiz.progress(), 50.0);
    }

    #[test]
    fn test_advance_and_retreat() {
        let mut quiz = engine(3, 1);

        assert_eq!(quiz.advance(), Step::Question(1));
        assert_eq!(quiz.advance(), Step::Question(2));
        assert_eq!(quiz.history(), &[0, 1]);

        assert_eq!(quiz.retreat(), 1);
        assert_eq!(quiz.retreat(), 0);

        // Floor at zero, repeatedly
        assert_eq!(quiz.retreat(), 0);
        assert_eq!(quiz.retreat(), 0);
    }

    #[test]
    fn test_advance_past_end_requests_match() {
        let mut quiz = engine(2, 1);
        quiz.advance();
        assert_eq!(quiz.advance(), Step::RequestMatch);
        assert!(quiz.is_complete());
        assert!(quiz.current_question().is_none());

        // Does not run further past the end
        assert_eq!(quiz.advance(), Step::RequestMatch);
        assert_eq!(quiz.current_index(), 2);
        assert_eq!(quiz.history(), &[0, 1]);

        assert_eq!(quiz.retreat(), 1);
    }

    #[test]
    fn test_jump_uses_history_for_retreat() {
        let mut quiz = engine(10, 7);
        quiz.advance();
        quiz.jump_to(8).unwrap();
        quiz.jump_to(3).unwrap();

        assert_eq!(quiz.retreat(), 8);
        assert_eq!(quiz.retreat(), 1);
        assert_eq!(quiz.retreat(), 0);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut quiz = engine(3, 1);
        let err = quiz.jump_to(3).unwrap_err();
        assert!(matches!(err, QuizError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(quiz.current_index(), 0);
        assert!(quiz.history().is_empty());
    }

    #[test]
    fn test_jump_to_current_does_not_duplicate_history() {
        let mut quiz = engine(3, 1);
        quiz.jump_to(0).unwrap();
        quiz.jump_to(0).unwrap();
        assert_eq!(quiz.history(), &[0]);
    }

    #[test]
    fn test_match_gate() {
        let mut quiz = engine(10, 7);
        for i in 0..6 {
            quiz.select_option(&format!("q{}", i), "a").unwrap();
        }

        assert!(!quiz.can_request_match());
        let err = quiz.ensure_match_ready().unwrap_err();
        assert_eq!(err.to_string(), "Please answer at least 7 questions to see your match.");

        quiz.select_option("q6", "a").unwrap();
        assert!(quiz.can_request_match());
        assert!(quiz.ensure_match_ready().is_ok());
    }

    #[test]
    fn test_preferences_and_formatted_answers() {
        let mut quiz = engine(3, 1);
        quiz.select_option("q2", "b").unwrap();
        quiz.select_option("q0", "a").unwrap();

        let prefs = quiz.preferences();
        assert_eq!(prefs.get("q0").map(String::as_str), Some("a"));
        assert_eq!(prefs.get("q2").map(String::as_str), Some("b"));
        assert!(!prefs.contains_key("q1"));

        let formatted = quiz.formatted_answers();
        assert_eq!(formatted.get("Prompt q2").map(String::as_str), Some("Option b"));
        assert_eq!(formatted.len(), 2);
    }

    #[test]
    fn test_founder_profile_requires_preferences() {
        let quiz = engine(2, 1);
        let err = quiz.founder_profile("Acme", 1000).unwrap_err();
        assert!(matches!(err, QuizError::MissingPreference("industry")));
    }

    #[test]
    fn test_reset() {
        let mut quiz = engine(3, 1);
        quiz.select_option("q0", "a").unwrap();
        quiz.advance();
        quiz.reset();

        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.answered_count(), 0);
        assert!(quiz.history().is_empty());
    }

    #[test]
    fn test_question_set_from_toml() {
        let source = r#"
            min_questions = 1

            [[questions]]
            id = "stage"
            prompt = "Funding stage?"

            [[questions.options]]
            text = "Seed"
            value = "seed"
            preference = { fundingStage = "seed", riskTolerance = "medium" }
        "#;

        let set = QuestionSet::from_toml_str(source).unwrap();
        assert_eq!(set.questions.len(), 1);
        assert!(!set.questions[0].scrollable);

        let mut quiz = QuizEngine::from_set(set).unwrap();
        quiz.select_option("stage", "seed").unwrap();
        assert_eq!(quiz.preferences().get("riskTolerance").map(String::as_str), Some("medium"));
    }
}
