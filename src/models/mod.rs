// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Question, QuestionOption, FounderProfile, InvestorRecord, MatchResult, Persona, ChatMessage, LabeledValue, ScoringWeights, KeywordRule};
pub use requests::{ClassifyRequest, SendMessageRequest, DEFAULT_CLASSIFICATION_GOAL};
pub use responses::{
    MatchResponse, ClassifyResponse, MessagesResponse, SendMessageResponse, HealthResponse, ErrorResponse,
    InvestorsResponse, InvestorResponse, IndustriesResponse, FundingStagesResponse, PlatformStats, RiskDistribution, StatsResponse,
};
