// HTTP API tests for Nexten Match

use actix_web::{test, web, App};

use nexten_match::core::MatchingEngine;
use nexten_match::models::{MatchResult, TopMatchesResponse};
use nexten_match::routes::{self, matches::AppState};

fn app_state() -> AppState {
    AppState {
        engine: MatchingEngine::with_defaults(),
        max_limit: 100,
    }
}

fn score_request_body() -> serde_json::Value {
    serde_json::json!({
        "candidate": {
            "skills": [
                { "name": "javascript", "level": "avancé" },
                { "name": "react", "level": "intermédiaire" }
            ],
            "experience": 3,
            "location": "Paris",
            "remotePreference": "hybride",
            "contractType": "CDI",
            "salaryExpectation": "45000-55000 EUR par an"
        },
        "offer": {
            "title": "Développeur front-end",
            "requiredSkills": [
                { "name": "javascript", "level": "intermédiaire" },
                { "name": "react", "level": "intermédiaire" }
            ],
            "experience": 2,
            "location": "Paris",
            "remotePolicy": "hybride",
            "contractType": "CDI",
            "salary": "50000-60000 EUR par an"
        }
    })
}

#[actix_web::test]
async fn test_score_endpoint_round_trips_perfect_match() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(score_request_body())
        .to_request();

    let result: MatchResult = test::call_and_read_body_json(&app, req).await;
    assert_eq!(result.total_score, 100);
    assert!(result.is_relevant);
    assert!(!result.explanations.is_empty());
}

#[actix_web::test]
async fn test_score_endpoint_with_missing_candidate() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(serde_json::json!({ "offer": { "title": "Développeur" } }))
        .to_request();

    let result: MatchResult = test::call_and_read_body_json(&app, req).await;
    assert_eq!(result.total_score, 0);
    assert!(!result.is_relevant);
}

#[actix_web::test]
async fn test_top_endpoint_ranks_offers() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let body = serde_json::json!({
        "candidate": score_request_body()["candidate"],
        "offers": [
            {
                "id": "java-offer",
                "title": "Développeur Java",
                "requiredSkills": ["java", "spring"],
                "location": "Marseille"
            },
            score_request_body()["offer"]
        ],
        "limit": 5
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/top")
        .set_json(body)
        .to_request();

    let response: TopMatchesResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(response.total_offers, 2);
    assert!(response.matches.len() <= 5);
    for entry in &response.matches {
        assert!(entry.result.is_relevant || entry.result.total_score >= 60);
    }
}

#[actix_web::test]
async fn test_top_endpoint_rejects_zero_limit() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/matches/top")
        .set_json(serde_json::json!({ "offers": [], "limit": 0 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_health_endpoint() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}
