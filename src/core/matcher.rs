use crate::models::{FounderProfile, InvestorRecord, KeywordRule, MatchResult, ScoringWeights};
use crate::core::scoring::{score_investor, BonusSource};

/// Investors scoring below this are dropped
pub const DEFAULT_MIN_SCORE: u8 = 3;

/// Scores are clamped to this value
pub const DEFAULT_MAX_SCORE: u8 = 7;

/// Result of the matching process
#[derive(Debug)]
pub struct MatchOutcome {
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
}

/// Matching orchestrator
///
/// # Pipeline Stages
/// 1. Score every catalog entry
/// 2. Drop entries below the minimum score
/// 3. Rank by score, descending; ties keep catalog order
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    keywords: Vec<KeywordRule>,
    min_score: u8,
    max_score: u8,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            keywords: KeywordRule::defaults(),
            min_score: DEFAULT_MIN_SCORE,
            max_score: DEFAULT_MAX_SCORE,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    pub fn with_keywords(mut self, keywords: Vec<KeywordRule>) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_thresholds(mut self, min_score: u8, max_score: u8) -> Self {
        self.min_score = min_score;
        self.max_score = max_score;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score the catalog for a founder and return the ranked matches
    ///
    /// # Arguments
    /// * `profile` - The founder profile
    /// * `catalog` - Investor catalog, in display order
    /// * `bonus` - Source of the randomized general-alignment bonus
    pub fn find_matches<B: BonusSource>(
        &self,
        profile: &FounderProfile,
        catalog: &[InvestorRecord],
        bonus: &mut B,
    ) -> MatchOutcome {
        let mut matches: Vec<MatchResult> = catalog
            .iter()
            .map(|investor| {
                score_investor(profile, investor, &self.weights, &self.keywords, self.max_score, &mut *bonus)
            })
            .filter(|result| result.score >= self.min_score)
            .collect();

        // sort_by is stable, so equal scores keep catalog order
        matches.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::debug!(
            "Scored {} investors for {} ({} above threshold)",
            catalog.len(),
            profile.industry,
            matches.len()
        );

        MatchOutcome {
            matches,
            total_candidates: catalog.len(),
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
