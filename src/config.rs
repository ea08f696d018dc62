use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use crate::core::matcher::{DEFAULT_MAX_SCORE, DEFAULT_MIN_SCORE};
use crate::core::catalog::default_question_set;
use crate::core::quiz::{QuestionSet, QuizEngine, QuizError};
use crate::core::scoring::DEFAULT_BONUS_PROBABILITY;
use crate::models::{KeywordRule, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub quiz: QuizSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 5000 }

/// Backend the API client talks to
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String { "http://localhost:5000".to_string() }
fn default_timeout_secs() -> u64 { 30 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizSettings {
    /// Overrides the minimum declared by the question set
    pub min_questions: Option<usize>,
    /// TOML question set replacing the built-in quiz
    pub questions_file: Option<String>,
}

impl QuizSettings {
    /// Resolve the active question set and check it can drive a quiz
    pub fn question_set(&self) -> Result<QuestionSet, QuizError> {
        let mut set = match &self.questions_file {
            Some(path) => QuestionSet::load(path)?,
            None => default_question_set(),
        };
        if let Some(min) = self.min_questions {
            set.min_questions = min;
        }

        QuizEngine::from_set(set.clone())?;
        Ok(set)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_min_score")]
    pub min_score: u8,
    #[serde(default = "default_max_score")]
    pub max_score: u8,
    /// Matches returned by the server, 0 for all; `total_matches` still counts all of them
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_bonus_probability")]
    pub bonus_probability: f64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            max_score: default_max_score(),
            max_results: default_max_results(),
            bonus_probability: default_bonus_probability(),
        }
    }
}

fn default_min_score() -> u8 { DEFAULT_MIN_SCORE }
fn default_max_score() -> u8 { DEFAULT_MAX_SCORE }
fn default_max_results() -> usize { 3 }
fn default_bonus_probability() -> f64 { DEFAULT_BONUS_PROBABILITY }

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "KeywordRule::defaults")]
    pub keywords: Vec<KeywordRule>,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            keywords: KeywordRule::defaults(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_industry_weight")]
    pub industry: u8,
    #[serde(default = "default_range_aligned_weight")]
    pub range_aligned: u8,
    #[serde(default = "default_range_close_weight")]
    pub range_close: u8,
    #[serde(default = "default_risk_tolerance_weight")]
    pub risk_tolerance: u8,
    #[serde(default = "default_keyword_weight")]
    pub keyword: u8,
    #[serde(default = "default_bonus_weight")]
    pub bonus: u8,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            industry: default_industry_weight(),
            range_aligned: default_range_aligned_weight(),
            range_close: default_range_close_weight(),
            risk_tolerance: default_risk_tolerance_weight(),
            keyword: default_keyword_weight(),
            bonus: default_bonus_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(w: &WeightsConfig) -> Self {
        ScoringWeights {
            industry: w.industry,
            range_aligned: w.range_aligned,
            range_close: w.range_close,
            risk_tolerance: w.risk_tolerance,
            keyword: w.keyword,
            bonus: w.bonus,
        }
    }
}

fn default_industry_weight() -> u8 { 2 }
fn default_range_aligned_weight() -> u8 { 2 }
fn default_range_close_weight() -> u8 { 1 }
fn default_risk_tolerance_weight() -> u8 { 1 }
fn default_keyword_weight() -> u8 { 1 }
fn default_bonus_weight() -> u8 { 1 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FUNDMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., FUNDMATCH__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        settings = apply_env_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        apply_env_overrides(settings)?.try_deserialize()
    }

    /// Parse configuration from TOML text, without environment overrides
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("FUNDMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Plain environment variables shared with the web frontend
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(base_url) = env::var("API_BASE_URL") {
        builder = builder.set_override("api.base_url", base_url)?;
    }
    if let Ok(port) = env::var("PORT") {
        builder = builder.set_override("server.port", port)?;
    }

    builder.build()
}
