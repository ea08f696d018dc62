//! Built-in reference data: the investor catalog, the default founder quiz and
//! the select-input label lists.

use crate::core::quiz::{QuestionSet, MIN_QUESTIONS_FOR_MATCH};
use crate::models::{InvestorRecord, LabeledValue, Question, QuestionOption};
use std::collections::BTreeMap;

fn investor(
    id: u32,
    name: &str,
    description: &str,
    range: (u64, u64),
    risk_tolerance: &str,
    location: &str,
    contact: &str,
) -> InvestorRecord {
    InvestorRecord {
        id,
        name: name.to_string(),
        description: description.to_string(),
        investment_range: range,
        risk_tolerance: risk_tolerance.to_string(),
        location: location.to_string(),
        contact: contact.to_string(),
    }
}

/// The fixed investor catalog
pub fn default_investors() -> Vec<InvestorRecord> {
    vec![
        investor(
            1,
            "Tech Growth Ventures",
            "Specializes in early-stage SaaS and AI startups, focusing on disruptive technologies and scalable solutions.",
            (500_000, 5_000_000),
            "high",
            "Silicon Valley",
            "contact@techgrowth.com",
        ),
        investor(
            2,
            "Health Innovation Fund",
            "Invests in innovative HealthTech solutions, digital health platforms, and biotech advancements.",
            (200_000, 3_000_000),
            "medium",
            "Boston",
            "info@healthinnov.com",
        ),
        investor(
            3,
            "EduFuture Capital",
            "Dedicated to transforming education through EdTech startups with scalable models and impactful learning tools.",
            (100_000, 2_000_000),
            "medium",
            "New York",
            "partners@edufuture.com",
        ),
        investor(
            4,
            "Global Fintech Partners",
            "A leading fund for FinTech startups, from payment solutions and blockchain to regulatory tech.",
            (1_000_000, 10_000_000),
            "high",
            "London",
            "invest@globalfintech.com",
        ),
        investor(
            5,
            "E-commerce Accelerators",
            "Focuses on direct-to-consumer (D2C) brands, e-commerce innovations, and logistics technology.",
            (50_000, 1_000_000),
            "low",
            "Los Angeles",
            "accelerate@ecommerce.com",
        ),
        investor(
            6,
            "AI Frontier Fund",
            "Exclusively invests in cutting-edge AI and Machine Learning applications across various sectors.",
            (750_000, 7_000_000),
            "high",
            "Seattle",
            "ai@frontier.com",
        ),
        investor(
            7,
            "Blockchain Innovators",
            "Supports decentralized applications, crypto infrastructure, and blockchain-native businesses.",
            (300_000, 4_000_000),
            "high",
            "Zug, Switzerland",
            "contact@blockchaininnov.com",
        ),
    ]
}

pub fn industries() -> Vec<LabeledValue> {
    vec![
        LabeledValue::new("fintech", "FinTech"),
        LabeledValue::new("healthtech", "HealthTech"),
        LabeledValue::new("edtech", "EdTech"),
        LabeledValue::new("saas", "SaaS"),
        LabeledValue::new("ecommerce", "E-commerce"),
        LabeledValue::new("ai", "AI/ML"),
        LabeledValue::new("blockchain", "Blockchain"),
        LabeledValue::new("iot", "IoT"),
    ]
}

pub fn funding_stages() -> Vec<LabeledValue> {
    vec![
        LabeledValue::new("pre-seed", "Pre-Seed"),
        LabeledValue::new("seed", "Seed"),
        LabeledValue::new("series-a", "Series A"),
        LabeledValue::new("series-b", "Series B"),
    ]
}

// (text, value, [(preference key, preference value)])
type OptionRow<'a> = (&'a str, &'a str, &'a [(&'a str, &'a str)]);

fn question(id: &str, prompt: &str, scrollable: bool, options: &[OptionRow<'_>]) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        scrollable,
        options: options
            .iter()
            .map(|(text, value, prefs)| QuestionOption {
                text: text.to_string(),
                value: value.to_string(),
                preference: prefs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect::<BTreeMap<_, _>>(),
            })
            .collect(),
    }
}

/// The ten-question founder quiz
pub fn default_question_set() -> QuestionSet {
    let questions = vec![
        question("question_id_1", "What's your startup's current funding stage?", false, &[
            ("Pre-Seed / Idea Stage", "pre-seed", &[("fundingStage", "pre-seed"), ("riskTolerance", "high")]),
            ("Seed / Early Traction", "seed", &[("fundingStage", "seed"), ("riskTolerance", "medium")]),
            ("Series A / Growth", "series-a", &[("fundingStage", "series-a"), ("riskTolerance", "low")]),
            ("Series B+ / Scale-up", "series-b", &[("fundingStage", "series-b"), ("riskTolerance", "low")]),
        ]),
        question("question_id_2", "Which industry best describes your startup?", true, &[
            ("FinTech", "fintech", &[("industry", "fintech")]),
            ("HealthTech", "healthtech", &[("industry", "healthtech")]),
            ("EdTech", "edtech", &[("industry", "edtech")]),
            ("SaaS", "saas", &[("industry", "saas")]),
            ("E-commerce", "ecommerce", &[("industry", "ecommerce")]),
            ("AI/ML", "ai", &[("industry", "ai")]),
            ("Blockchain", "blockchain", &[("industry", "blockchain")]),
            ("IoT", "iot", &[("industry", "iot")]),
            ("CleanTech", "cleantech", &[("industry", "cleantech")]),
            ("BioTech", "biotech", &[("industry", "biotech")]),
            ("Gaming", "gaming", &[("industry", "gaming")]),
        ]),
        question("question_id_3", "How hands-on do you prefer your investors to be?", true, &[
            ("Very involved (mentorship, active board role)", "active", &[("investorInvolvement", "active")]),
            ("Moderately involved (strategic advice, connections)", "balanced", &[("investorInvolvement", "balanced")]),
            ("Hands-off (capital only, minimal interference)", "passive", &[("investorInvolvement", "passive")]),
            ("Accelerator/Incubator program", "accelerator", &[("investorInvolvement", "active")]),
            ("Angel investor with domain expertise", "angel", &[("investorInvolvement", "balanced")]),
            ("Venture Capital (VC) firm", "vc", &[("investorInvolvement", "balanced")]),
        ]),
        question("question_id_4", "What's your long-term vision for your startup's exit?", false, &[
            ("Acquisition by a larger company", "acquisition", &[("exitStrategy", "acquisition")]),
            ("Initial Public Offering (IPO)", "ipo", &[("exitStrategy", "ipo")]),
            ("Sustainable, long-term private company", "private", &[("exitStrategy", "private")]),
        ]),
        question("question_id_5", "Which investor value aligns most with your company culture?", false, &[
            ("Innovation & Disruption", "innovation", &[("investorValues", "innovation")]),
            ("Social Impact & Sustainability", "social_impact", &[("investorValues", "social_impact")]),
            ("Profitability & Market Dominance", "profitability", &[("investorValues", "profitability")]),
        ]),
        question("question_id_6", "Do you prefer investors with a specific geographic focus?", false, &[
            ("No preference (global reach)", "global", &[("geographicPreference", "global")]),
            ("North America", "north_america", &[("geographicPreference", "north_america")]),
            ("Europe", "europe", &[("geographicPreference", "europe")]),
            ("Asia-Pacific (APAC)", "apac", &[("geographicPreference", "apac")]),
        ]),
        question("question_id_7", "How quickly do you need to secure funding?", false, &[
            ("Urgent (within 3 months)", "urgent", &[("fundingSpeed", "urgent"), ("riskTolerance", "high")]),
            ("Moderate (3-6 months)", "moderate", &[("fundingSpeed", "moderate"), ("riskTolerance", "medium")]),
            ("Flexible (6+ months)", "flexible", &[("fundingSpeed", "flexible"), ("riskTolerance", "low")]),
        ]),
        question("question_id_8", "How important is an investor's network to you?", false, &[
            ("Crucial (introductions, partnerships)", "crucial", &[("networkAccess", "crucial"), ("investorInvolvement", "active")]),
            ("Helpful (some connections are a bonus)", "helpful", &[("networkAccess", "helpful"), ("investorInvolvement", "balanced")]),
            ("Not a priority (focused on capital)", "not_priority", &[("networkAccess", "not_priority"), ("investorInvolvement", "passive")]),
        ]),
        question("question_id_9", "What's your preferred deal structure?", true, &[
            ("Equity (traditional ownership stake)", "equity", &[("dealStructure", "equity")]),
            ("Convertible Note / SAFE (deferred equity)", "convertible", &[("dealStructure", "convertible")]),
            ("Debt (loans, revenue-based financing)", "debt", &[("dealStructure", "debt")]),
            ("Revenue Share", "revenue_share", &[("dealStructure", "debt")]),
            ("Grant funding", "grant", &[("dealStructure", "grant")]),
        ]),
        question("question_id_10", "Are you open to an investor taking a board seat?", false, &[
            ("Yes, if they add significant value", "yes_value_add", &[("boardSeat", "yes"), ("investorInvolvement", "active")]),
            ("Maybe, depends on the investor", "maybe", &[("boardSeat", "maybe"), ("investorInvolvement", "balanced")]),
            ("No, prefer to maintain full control", "no_control", &[("boardSeat", "no"), ("investorInvolvement", "passive")]),
        ]),
    ];

    QuestionSet {
        min_questions: MIN_QUESTIONS_FOR_MATCH,
        questions,
    }
}
