use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::scoring::RandomBonus;
use crate::core::{Matcher, QuestionSet};
use crate::models::{ErrorResponse, FounderProfile, HealthResponse, InvestorRecord, MatchResponse};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Vec<InvestorRecord>>,
    pub matcher: Matcher,
    pub questions: Arc<QuestionSet>,
    pub bonus_probability: f64,
    /// 0 returns every match
    pub max_results: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match", web::post().to(find_matches))
        .route("/questions", web::get().to(get_questions));
}

/// Question set served to the quiz frontend
///
/// GET /api/questions
async fn get_questions(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "min_questions": state.questions.min_questions,
        "questions": state.questions.questions,
    }))
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/match
///
/// Request body:
/// ```json
/// {
///   "industry": "fintech",
///   "funding_stage": "seed",
///   "risk_tolerance": "high",
///   "investment_amount": 500000,
///   "company_name": "StartupCorp"
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FounderProfile>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        let mut fields: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
        fields.sort_unstable();
        tracing::info!("Validation failed for match request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new(format!(
            "Missing required fields: {}",
            fields.join(", ")
        )));
    }

    let profile = req.into_inner();

    tracing::info!(
        "Finding matches for {} (industry: {}, amount: {})",
        profile.company_name,
        profile.industry,
        profile.investment_amount
    );

    let mut bonus = RandomBonus::thread_local(state.bonus_probability);
    let result = state.matcher.find_matches(&profile, &state.catalog, &mut bonus);

    let total_matches = result.matches.len();
    let mut matches = result.matches;
    if state.max_results > 0 {
        matches.truncate(state.max_results);
    }

    tracing::info!(
        "Returning {} matches for {} (from {} investors, {} above threshold)",
        matches.len(),
        profile.company_name,
        result.total_candidates,
        total_matches
    );

    HttpResponse::Ok().json(MatchResponse {
        success: true,
        matches,
        total_matches,
        error: None,
    })
}
