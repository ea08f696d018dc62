use crate::models::{FounderProfile, InvestorRecord, KeywordRule, MatchResult, ScoringWeights};
use rand::rngs::ThreadRng;
use rand::Rng;

/// Reason used when no rule fired
pub const DEFAULT_REASON: &str = "General interest in promising startups";

/// Reason attached to the randomized bonus
pub const BONUS_REASON: &str = "Strong general alignment with innovative startups";

/// Probability of the general-alignment bonus
pub const DEFAULT_BONUS_PROBABILITY: f64 = 0.4;

/// Decides whether an investor receives the general-alignment bonus
pub trait BonusSource {
    fn grant(&mut self) -> bool;
}

/// Never grants the bonus
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBonus;

impl BonusSource for NoBonus {
    fn grant(&mut self) -> bool {
        false
    }
}

/// Always grants the bonus
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysBonus;

impl BonusSource for AlwaysBonus {
    fn grant(&mut self) -> bool {
        true
    }
}

/// Grants the bonus with a fixed probability
#[derive(Debug, Clone)]
pub struct RandomBonus<R> {
    rng: R,
    probability: f64,
}

impl<R: Rng> RandomBonus<R> {
    /// Out-of-range probabilities are clamped; NaN and infinities disable the bonus
    pub fn new(rng: R, probability: f64) -> Self {
        let probability = if probability.is_finite() {
            probability.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { rng, probability }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl RandomBonus<ThreadRng> {
    pub fn thread_local(probability: f64) -> Self {
        Self::new(rand::rng(), probability)
    }
}

impl<R: Rng> BonusSource for RandomBonus<R> {
    fn grant(&mut self) -> bool {
        self.rng.random_bool(self.probability)
    }
}

/// Score one investor against a founder profile (0 to `max_score`)
///
/// Rules, in reason order:
/// - industry named in the investor description or name
/// - requested amount inside the investment range, or a looser overlap
/// - identical risk tolerance
/// - company-name keyword rules
/// - randomized general-alignment bonus
pub fn score_investor(
    profile: &FounderProfile,
    investor: &InvestorRecord,
    weights: &ScoringWeights,
    keywords: &[KeywordRule],
    max_score: u8,
    bonus: &mut dyn BonusSource,
) -> MatchResult {
    let mut score: u32 = 0;
    let mut reasons = Vec::new();

    let industry = profile.industry.to_lowercase();
    let investor_name = investor.name.to_lowercase();

    if !industry.is_empty()
        && (investor.description.to_lowercase().contains(&industry) || investor_name.contains(&industry))
    {
        score += weights.industry as u32;
        reasons.push(format!("Invests in your industry: {}", capitalize(&profile.industry)));
    }

    match range_fit(profile.investment_amount, investor.min_investment(), investor.max_investment()) {
        RangeFit::Aligned => {
            score += weights.range_aligned as u32;
            reasons.push(format!(
                "Investment range aligns: {} - {}",
                format_amount(investor.min_investment()),
                format_amount(investor.max_investment())
            ));
        }
        RangeFit::Close => {
            score += weights.range_close as u32;
            reasons.push("Investment range is a close fit".to_string());
        }
        RangeFit::Outside => {}
    }

    if investor.risk_tolerance == profile.risk_tolerance {
        score += weights.risk_tolerance as u32;
        reasons.push(format!("Matches your risk tolerance: {}", capitalize(&profile.risk_tolerance)));
    }

    let company = profile.company_name.to_lowercase();
    for rule in keywords {
        let keyword = rule.keyword.to_lowercase();
        if !keyword.is_empty() && company.contains(&keyword) && investor_name.contains(&keyword) {
            score += weights.keyword as u32;
            reasons.push(rule.reason.clone());
        }
    }

    if bonus.grant() {
        score += weights.bonus as u32;
        reasons.push(BONUS_REASON.to_string());
    }

    if reasons.is_empty() {
        reasons.push(DEFAULT_REASON.to_string());
    }

    MatchResult {
        investor: investor.clone(),
        score: score.min(max_score as u32) as u8,
        reasons,
    }
}

/// How a requested amount relates to an investor's range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeFit {
    /// `min <= amount <= max`
    Aligned,
    /// `min < amount * 1.5 && max > amount * 0.5`
    Close,
    Outside,
}

/// Classify the requested amount against `[min, max]`
///
/// The loose overlap is evaluated in integers: `2*min < 3*amount` and
/// `2*max > amount`.
#[inline]
pub fn range_fit(amount: u64, min: u64, max: u64) -> RangeFit {
    if min <= amount && amount <= max {
        return RangeFit::Aligned;
    }

    let (amount, min, max) = (amount as u128, min as u128, max as u128);
    if 2 * min < 3 * amount && 2 * max > amount {
        RangeFit::Close
    } else {
        RangeFit::Outside
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `$1,250,000` style amount
fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn profile(industry: &str, amount: u64, risk: &str, company: &str) -> FounderProfile {
        FounderProfile {
            industry: industry.to_string(),
            funding_stage: "seed".to_string(),
            risk_tolerance: risk.to_string(),
            investment_amount: amount,
            company_name: company.to_string(),
        }
    }

    fn investor(name: &str, description: &str, range: (u64, u64), risk: &str) -> InvestorRecord {
        InvestorRecord {
            id: 1,
            name: name.to_string(),
            description: description.to_string(),
            investment_range: range,
            risk_tolerance: risk.to_string(),
            location: String::new(),
            contact: String::new(),
        }
    }

    fn score(profile: &FounderProfile, investor: &InvestorRecord, bonus: &mut dyn BonusSource) -> MatchResult {
        score_investor(profile, investor, &ScoringWeights::default(), &KeywordRule::defaults(), 7, bonus)
    }

    #[test]
    fn test_range_fit_boundaries() {
        assert_eq!(range_fit(500_000, 500_000, 5_000_000), RangeFit::Aligned);
        assert_eq!(range_fit(5_000_000, 500_000, 5_000_000), RangeFit::Aligned);

        // min < 1.5 * amount
        assert_eq!(range_fit(400_000, 500_000, 5_000_000), RangeFit::Close);
        // 2 * 600_000 == 3 * 400_000, strict inequality fails
        assert_eq!(range_fit(400_000, 600_000, 5_000_000), RangeFit::Outside);

        // max > 0.5 * amount
        assert_eq!(range_fit(1_500_000, 100_000, 1_000_000), RangeFit::Close);
        assert_eq!(range_fit(2_000_000, 100_000, 1_000_000), RangeFit::Outside);
    }

    #[test]
    fn test_aligned_range_takes_precedence() {
        let p = profile("gaming", 500_000, "low", "Acme");
        let inv = investor("Tech Growth Ventures", "SaaS", (500_000, 5_000_000), "high");

        let result = score(&p, &inv, &mut NoBonus);
        assert_eq!(result.score, 2);
        assert_eq!(result.reasons, vec!["Investment range aligns: $500,000 - $5,000,000"]);
    }

    #[test]
    fn test_all_rules_fire_and_clamp() {
        let p = profile("ai", 1_000_000, "high", "Health AI");
        let inv = investor("AI Health Fund", "AI in healthcare", (500_000, 2_000_000), "high");

        // 2 + 2 + 1 + 1 + 1 + 1 = 8, clamped
        let result = score(&p, &inv, &mut AlwaysBonus);
        assert_eq!(result.score, 7);
        assert_eq!(result.reasons.len(), 6);
        assert_eq!(result.reasons[0], "Invests in your industry: Ai");
        assert_eq!(result.reasons[5], BONUS_REASON);
    }

    #[test]
    fn test_default_reason_when_nothing_fires() {
        let p = profile("gaming", 10, "low", "Acme");
        let inv = investor("Blockchain Innovators", "crypto", (300_000, 4_000_000), "high");

        let result = score(&p, &inv, &mut NoBonus);
        assert_eq!(result.score, 0);
        assert_eq!(result.reasons, vec![DEFAULT_REASON]);
    }

    #[test]
    fn test_empty_industry_never_matches() {
        let p = profile("", 10, "low", "");
        let inv = investor("Any Fund", "anything", (300_000, 4_000_000), "high");
        assert_eq!(score(&p, &inv, &mut NoBonus).score, 0);
    }

    #[test]
    fn test_random_bonus_probability_extremes() {
        let mut never = RandomBonus::new(StdRng::seed_from_u64(7), 0.0);
        let mut always = RandomBonus::new(StdRng::seed_from_u64(7), 1.0);
        assert!((0..100).all(|_| !never.grant()));
        assert!((0..100).all(|_| always.grant()));

        assert_eq!(RandomBonus::new(StdRng::seed_from_u64(7), 3.0).probability(), 1.0);
    }

    #[test]
    fn test_non_finite_bonus_probability_is_disabled() {
        for p in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut bonus = RandomBonus::new(StdRng::seed_from_u64(7), p);
            assert_eq!(bonus.probability(), 0.0);
            assert!((0..100).all(|_| !bonus.grant()));
        }
    }

    #[test]
    fn test_seeded_bonus_is_reproducible() {
        let mut a = RandomBonus::new(StdRng::seed_from_u64(42), DEFAULT_BONUS_PROBABILITY);
        let mut b = RandomBonus::new(StdRng::seed_from_u64(42), DEFAULT_BONUS_PROBABILITY);
        let left: Vec<bool> = (0..32).map(|_| a.grant()).collect();
        let right: Vec<bool> = (0..32).map(|_| b.grant()).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0), "$0");
        assert_eq!(format_amount(999), "$999");
        assert_eq!(format_amount(1000), "$1,000");
        assert_eq!(format_amount(10_000_000), "$10,000,000");
    }
}
