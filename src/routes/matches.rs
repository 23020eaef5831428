use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::MatchingEngine;
use crate::models::{
    ErrorResponse, HealthResponse, ScoreMatchRequest, TopMatchesRequest, TopMatchesResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: MatchingEngine,
    pub max_limit: u16,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/score", web::post().to(score_match))
        .route("/matches/top", web::post().to(top_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score a single (candidate, offer) pair
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "candidate": { ... },
///   "offer": { ... }
/// }
/// ```
async fn score_match(
    state: web::Data<AppState>,
    req: web::Json<ScoreMatchRequest>,
) -> impl Responder {
    let result = state
        .engine
        .score(req.candidate.as_ref(), req.offer.as_ref());

    tracing::info!(
        "Scored pair: total={}, relevant={}",
        result.total_score,
        result.is_relevant
    );

    HttpResponse::Ok().json(result)
}

/// Rank a batch of offers for one candidate
///
/// POST /api/v1/matches/top
///
/// Request body:
/// ```json
/// {
///   "candidate": { ... },
///   "offers": [ ... ],
///   "limit": 10
/// }
/// ```
async fn top_matches(
    state: web::Data<AppState>,
    req: web::Json<TopMatchesRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for top_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // Cap limit to prevent excessive responses
    let limit = req.limit.min(state.max_limit) as usize;

    tracing::debug!("Ranking {} offers, limit {}", req.offers.len(), limit);

    let matches = state
        .engine
        .filter_top_matches(req.candidate.as_ref(), &req.offers, limit);

    tracing::info!(
        "Returning {} relevant offers (from {} scored)",
        matches.len(),
        req.offers.len()
    );

    HttpResponse::Ok().json(TopMatchesResponse {
        matches,
        total_offers: req.offers.len(),
    })
}
