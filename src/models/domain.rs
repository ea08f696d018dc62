use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

/// A single quiz question with its answer options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(alias = "question")]
    pub prompt: String,
    pub options: Vec<QuestionOption>,
    #[serde(default)]
    pub scrollable: bool,
}

impl Question {
    /// Look up an option by its value
    pub fn option(&self, value: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|o| o.value == value)
    }
}

/// One selectable answer. `preference` facts are merged into the founder's
/// aggregate preferences when the option is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub text: String,
    pub value: String,
    #[serde(default)]
    pub preference: BTreeMap<String, String>,
}

/// Founder profile submitted for matching
///
/// Wire keys are snake_case; the camelCase keys sent by the quiz form are accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct FounderProfile {
    #[validate(length(min = 1))]
    pub industry: String,
    #[validate(length(min = 1))]
    #[serde(alias = "fundingStage")]
    pub funding_stage: String,
    #[validate(length(min = 1))]
    #[serde(alias = "riskTolerance")]
    pub risk_tolerance: String,
    #[validate(range(min = 1))]
    #[serde(alias = "investmentAmount", deserialize_with = "deserialize_amount")]
    pub investment_amount: u64,
    #[serde(alias = "companyName", default)]
    pub company_name: String,
}

/// Accept either a JSON integer or a numeric string, like a form field value
fn deserialize_amount<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(u64),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(n) => Ok(n),
        Amount::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid investment amount: {:?}", s))),
    }
}

/// Investor catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorRecord {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    pub description: String,
    pub investment_range: (u64, u64),
    pub risk_tolerance: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub contact: String,
}

impl InvestorRecord {
    #[inline]
    pub fn min_investment(&self) -> u64 {
        self.investment_range.0
    }

    #[inline]
    pub fn max_investment(&self) -> u64 {
        self.investment_range.1
    }
}

/// Scored compatibility between a founder profile and one investor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub investor: InvestorRecord,
    pub score: u8,
    #[serde(rename = "match_reasons", alias = "reasons")]
    pub reasons: Vec<String>,
}

/// Founder persona produced by the classification backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    pub name: String,
    pub description: String,
    #[serde(default, alias = "suggestions")]
    pub details: Vec<String>,
}

/// Chat message from the dashboard message feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: String,
    pub content: String,
    #[serde(default)]
    pub timestamp: String,
}

/// `{value, label}` pair for select inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledValue {
    pub value: String,
    pub label: String,
}

impl LabeledValue {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Points awarded by each scoring rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub industry: u8,
    pub range_aligned: u8,
    pub range_close: u8,
    pub risk_tolerance: u8,
    pub keyword: u8,
    pub bonus: u8,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            industry: 2,
            range_aligned: 2,
            range_close: 1,
            risk_tolerance: 1,
            keyword: 1,
            bonus: 1,
        }
    }
}

/// Company-name keyword rule: fires when both the company name and the
/// investor name contain `keyword` (case-insensitive)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub keyword: String,
    pub reason: String,
}

impl KeywordRule {
    pub fn new(keyword: &str, reason: &str) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
            reason: reason.to_string(),
        }
    }

    pub fn defaults() -> Vec<KeywordRule> {
        vec![
            KeywordRule::new("ai", "Interest in AI-driven companies"),
            KeywordRule::new("health", "Interest in Health-related companies"),
        ]
    }
}
