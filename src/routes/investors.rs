use actix_web::{web, HttpResponse, Responder};
use crate::core::{funding_stages, industries};
use crate::models::{
    ErrorResponse, FundingStagesResponse, IndustriesResponse, InvestorRecord, InvestorResponse, InvestorsResponse,
    PlatformStats, RiskDistribution, StatsResponse,
};
use crate::routes::matches::AppState;

/// Configure catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/investors", web::get().to(list_investors))
        .route("/investors/{id}", web::get().to(get_investor))
        .route("/industries", web::get().to(list_industries))
        .route("/funding-stages", web::get().to(list_funding_stages))
        .route("/stats", web::get().to(platform_stats));
}

/// GET /api/investors
async fn list_investors(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(InvestorsResponse {
        success: true,
        investors: state.catalog.to_vec(),
        count: state.catalog.len(),
    })
}

/// GET /api/investors/{id}
async fn get_investor(state: web::Data<AppState>, path: web::Path<u32>) -> impl Responder {
    let id = path.into_inner();

    match state.catalog.iter().find(|investor| investor.id == id) {
        Some(investor) => HttpResponse::Ok().json(InvestorResponse {
            success: true,
            investor: investor.clone(),
        }),
        None => {
            tracing::debug!("Investor {} not found", id);
            HttpResponse::NotFound().json(ErrorResponse::new("Investor not found"))
        }
    }
}

async fn list_industries() -> impl Responder {
    HttpResponse::Ok().json(IndustriesResponse {
        success: true,
        industries: industries(),
    })
}

async fn list_funding_stages() -> impl Responder {
    HttpResponse::Ok().json(FundingStagesResponse {
        success: true,
        stages: funding_stages(),
    })
}

/// GET /api/stats
async fn platform_stats(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(StatsResponse {
        success: true,
        stats: compute_stats(&state.catalog),
    })
}

/// Catalog size, average investment bounds and risk tolerance distribution
pub fn compute_stats(catalog: &[InvestorRecord]) -> PlatformStats {
    let total = catalog.len();
    let average = |sum: u64| if total == 0 { 0 } else { sum / total as u64 };

    let mut distribution = RiskDistribution::default();
    for investor in catalog {
        match investor.risk_tolerance.as_str() {
            "high" => distribution.high += 1,
            "medium" => distribution.medium += 1,
            "low" => distribution.low += 1,
            _ => {}
        }
    }

    PlatformStats {
        total_investors: total,
        average_min_investment: average(catalog.iter().map(InvestorRecord::min_investment).sum()),
        average_max_investment: average(catalog.iter().map(InvestorRecord::max_investment).sum()),
        risk_tolerance_distribution: distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::default_investors;

    #[test]
    fn test_compute_stats() {
        let stats = compute_stats(&default_investors());
        assert_eq!(stats.total_investors, 7);
        assert_eq!(stats.risk_tolerance_distribution, RiskDistribution { high: 4, medium: 2, low: 1 });
        // (500k + 200k + 100k + 1M + 50k + 750k + 300k) / 7
        assert_eq!(stats.average_min_investment, 414_285);
    }

    #[test]
    fn test_compute_stats_empty_catalog() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total_investors, 0);
        assert_eq!(stats.average_max_investment, 0);
    }
}
