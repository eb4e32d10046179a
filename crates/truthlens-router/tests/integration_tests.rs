//! Integration tests for the Router service

use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    Router,
};
use serde::de::DeserializeOwned;
use tower::ServiceExt; // for oneshot
use truthlens_router::{
    config::RouterConfig,
    handlers::{
        create_router, AnalyzeResponse, AppState, ErrorResponse, HealthCheckResponse,
        ModelInfoResponse, NotFoundResponse, ServiceInfo, StatsResponse, VerifyResponse,
    },
};
use truthlens_verifier::Verifier;

const SPECIFIC: &str = "The Eiffel Tower was completed in 1889 and stands at 330 meters tall.";
const ABSURD: &str = "The Eiffel Tower is made entirely of chocolate and melts every summer.";

/// Helper to create test application state
fn create_test_state() -> AppState {
    AppState::new(Verifier::with_defaults().unwrap())
}

fn post_text(uri: &str, text: &str) -> Request<Body> {
    let body = serde_json::json!({ "text": text }).to_string();
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

#[tokio::test]
async fn test_root_describes_service() {
    let app = create_router(create_test_state());

    let response = send(&app, get("/")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let info: ServiceInfo = read_json(response).await;
    assert_eq!(info.service, "TruthLens");
    assert_eq!(info.status, "operational");
    assert_eq!(info.endpoints["verify"], "POST /verify");
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = create_router(create_test_state());

    let response = send(&app, get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let health: HealthCheckResponse = read_json(response).await;
    assert_eq!(health.status, "healthy");
    assert_eq!(health.model, "loaded");
    assert!(chrono::DateTime::parse_from_rfc3339(&health.timestamp).is_ok());
}

#[tokio::test]
async fn test_verify_returns_claims_in_order() {
    let app = create_router(create_test_state());

    let text = format!("{} {}", SPECIFIC, ABSURD);
    let response = send(&app, post_text("/verify", &text)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let report: VerifyResponse = read_json(response).await;
    assert_eq!(report.claims.len(), 2);
    // The splitting delimiter is consumed
    assert_eq!(report.claims[0].claim, SPECIFIC.trim_end_matches('.'));
    assert!(report.claims[0].verified);
    assert!(!report.claims[1].verified);
    assert_eq!(report.hallucination_risk, "medium");
    assert_eq!(report.overall_score, report.confidence);

    for claim in &report.claims {
        assert!((0.0..=100.0).contains(&claim.confidence));
        assert!((1..=5).contains(&claim.sources));
    }
}

#[tokio::test]
async fn test_verify_rejects_empty_text() {
    let app = create_router(create_test_state());

    let response = send(&app, post_text("/verify", "   ")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.message, "Text cannot be empty");
}

#[tokio::test]
async fn test_verify_rejects_oversized_text() {
    let app = create_router(create_test_state());

    let text = "a".repeat(10_001);
    let response = send(&app, post_text("/verify", &text)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.message, "Text too long (max 10000 chars)");
}

#[tokio::test]
async fn test_verify_rejects_malformed_body() {
    let app = create_router(create_test_state());

    let request = Request::builder()
        .method("POST")
        .uri("/verify")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"content": "missing text field"}"#))
        .unwrap();

    let response = send(&app, request).await;
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_analyze_returns_breakdown() {
    let app = create_router(create_test_state());

    let response = send(&app, post_text("/analyze", SPECIFIC)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let analysis: AnalyzeResponse = read_json(response).await;
    assert_eq!(analysis.risk, "medium");
    assert_eq!(analysis.features["word_count"], 13.0);
    assert_eq!(analysis.features["has_numbers"], 1.0);
    assert_eq!(analysis.features.len(), 13);
    assert!((0.0..=1.0).contains(&analysis.confidence));
}

#[tokio::test]
async fn test_analyze_rejects_empty_text() {
    let app = create_router(create_test_state());

    let response = send(&app, post_text("/analyze", "")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_stats_count_verifications() {
    let app = create_router(create_test_state());

    let before: StatsResponse = read_json(send(&app, get("/stats")).await).await;
    assert_eq!(before.total_verifications, 0);

    let text = format!("{} {}", SPECIFIC, ABSURD);
    send(&app, post_text("/verify", SPECIFIC)).await;
    send(&app, post_text("/verify", &text)).await;
    // Rejected requests are not counted
    send(&app, post_text("/verify", "")).await;

    let after: StatsResponse = read_json(send(&app, get("/stats")).await).await;
    assert_eq!(after.total_verifications, 2);
    assert_eq!(after.claims_analyzed, 3);
    assert_eq!(after.claims_verified, 2);
    assert_eq!(after.hallucinations_detected, 0);
}

#[tokio::test]
async fn test_model_info_reports_configured_weights() {
    let toml = r#"
        [engine.weights]
        linguistic = 0.2
        semantic = 0.5
        factual = 0.3
    "#;
    let config = RouterConfig::from_toml(toml).unwrap();
    let app = create_router(truthlens_router::build_state(&config).unwrap());

    let response = send(&app, get("/model-info")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let info: ModelInfoResponse = read_json(response).await;
    assert_eq!(info.sub_models, vec!["linguistic", "semantic", "factual"]);
    assert_eq!(info.weights["linguistic"], 0.2);
    assert_eq!(info.weights["semantic"], 0.5);
    assert_eq!(info.high_confidence_threshold, 0.8);
    assert_eq!(info.verified_threshold, 0.7);
}

#[tokio::test]
async fn test_unknown_route_not_found() {
    let app = create_router(create_test_state());

    let response = send(&app, get("/nonexistent")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: NotFoundResponse = read_json(response).await;
    assert_eq!(body.error, "Endpoint not found");
    assert!(body.available_endpoints.contains(&"/verify".to_string()));
}
