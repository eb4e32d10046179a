//! HTTP request handlers for the Router service.
//!
//! Implements verification, whole-text analysis, statistics and service
//! metadata endpoints using axum.

use crate::stats::StatsTracker;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{error, warn};
use truthlens_domain::{ClaimVerdict, ScoreResult};
use truthlens_verifier::{VerificationReport, Verifier, VerifierError};

/// API version reported by `/`, `/health` and `/model-info`
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

const ENDPOINTS: [&str; 6] = ["/", "/verify", "/analyze", "/health", "/stats", "/model-info"];

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Verifier (and, through it, the scoring engine)
    pub verifier: Arc<Verifier>,
    /// Process-lifetime counters
    pub stats: Arc<StatsTracker>,
}

impl AppState {
    /// Wrap a verifier with fresh counters
    pub fn new(verifier: Verifier) -> Self {
        Self {
            verifier: Arc::new(verifier),
            stats: Arc::new(StatsTracker::new()),
        }
    }
}

/// Body of `/verify` and `/analyze`
#[derive(Debug, Deserialize)]
pub struct TextRequest {
    /// Text to score
    pub text: String,
}

/// Per-claim entry in a verification response
#[derive(Debug, Serialize, Deserialize)]
pub struct ClaimResponse {
    /// Claim text
    pub claim: String,
    /// Met the verification threshold
    pub verified: bool,
    /// Confidence, 0-100
    pub confidence: f64,
    /// Mock source count
    pub sources: u32,
    /// Engine risk tier for this claim
    pub risk_level: String,
}

impl From<&ClaimVerdict> for ClaimResponse {
    fn from(verdict: &ClaimVerdict) -> Self {
        Self {
            claim: verdict.claim.clone(),
            verified: verdict.verified,
            confidence: verdict.confidence,
            sources: verdict.sources,
            risk_level: verdict.risk_level.to_string(),
        }
    }
}

/// Response of `/verify`
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// Mean claim confidence, 0-100
    pub overall_score: f64,
    /// Same as `overall_score`
    pub confidence: f64,
    /// Aggregate risk: "low", "medium" or "high"
    pub hallucination_risk: String,
    /// Per-claim results in input order
    pub claims: Vec<ClaimResponse>,
    /// Seconds
    pub processing_time: f64,
    /// RFC 3339
    pub timestamp: String,
}

impl From<&VerificationReport> for VerifyResponse {
    fn from(report: &VerificationReport) -> Self {
        Self {
            overall_score: report.overall_score,
            confidence: report.confidence,
            hallucination_risk: report.hallucination_risk.to_string(),
            claims: report.claims.iter().map(ClaimResponse::from).collect(),
            processing_time: report.processing_time,
            timestamp: report.timestamp.clone(),
        }
    }
}

/// Response of `/analyze`: full engine breakdown, three decimals
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Ensemble confidence
    pub confidence: f64,
    /// Engine risk tier
    pub risk: String,
    /// Linguistic sub-model score
    pub linguistic_score: f64,
    /// Semantic sub-model score
    pub semantic_score: f64,
    /// Factual sub-model score
    pub factual_score: f64,
    /// Extracted features by name
    pub features: BTreeMap<String, f64>,
}

impl From<&ScoreResult> for AnalyzeResponse {
    fn from(result: &ScoreResult) -> Self {
        let rounded = result.rounded();
        Self {
            confidence: rounded.confidence,
            risk: rounded.risk.to_string(),
            linguistic_score: rounded.linguistic_score,
            semantic_score: rounded.semantic_score,
            factual_score: rounded.factual_score,
            features: rounded
                .features
                .pairs()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }
}

/// Response of `/`
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Service name
    pub service: String,
    /// API version
    pub version: String,
    /// Always "operational" while serving
    pub status: String,
    /// Short description
    pub description: String,
    /// Endpoint name → "METHOD path"
    pub endpoints: BTreeMap<String, String>,
}

/// Response of `/health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// RFC 3339
    pub timestamp: String,
    /// Scoring engine state
    pub model: String,
    /// API version
    pub api_version: String,
}

/// Response of `/stats`
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Completed verifications since start
    pub total_verifications: u64,
    /// Verifications with high aggregate risk
    pub hallucinations_detected: u64,
    /// Claims scored
    pub claims_analyzed: u64,
    /// Claims verified
    pub claims_verified: u64,
    /// Mean seconds per verification
    pub average_processing_time: f64,
    /// Seconds since start
    pub uptime_seconds: u64,
    /// RFC 3339
    pub timestamp: String,
}

/// Response of `/model-info`
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelInfoResponse {
    /// Model family
    pub model_type: String,
    /// API version
    pub version: String,
    /// Sub-model names in ensemble order
    pub sub_models: Vec<String>,
    /// Sub-model name → ensemble weight
    pub weights: BTreeMap<String, f64>,
    /// Confidence at or above which risk is low
    pub high_confidence_threshold: f64,
    /// Confidence at or above which risk is medium
    pub medium_confidence_threshold: f64,
    /// Confidence at or above which a claim is verified
    pub verified_threshold: f64,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error category
    pub error: String,
    /// Human-readable detail
    pub message: String,
}

/// Body returned for unknown routes
#[derive(Debug, Serialize, Deserialize)]
pub struct NotFoundResponse {
    /// Error category
    pub error: String,
    /// Human-readable detail
    pub message: String,
    /// Routes this service answers
    pub available_endpoints: Vec<String>,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Caller supplied invalid input
    BadRequest(String),
    /// Internal server error
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Invalid request", msg),
            AppError::InternalError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error", msg)
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
        });
        (status, body).into_response()
    }
}

impl From<VerifierError> for AppError {
    fn from(e: VerifierError) -> Self {
        if e.is_client_error() {
            AppError::BadRequest(e.to_string())
        } else {
            AppError::InternalError(e.to_string())
        }
    }
}

/// POST /verify - Segment, score and aggregate the submitted text
async fn verify(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> Result<Json<VerifyResponse>, AppError> {
    let verifier = Arc::clone(&state.verifier);

    // Scoring runs off the async workers; a panic there surfaces as a 500
    let report = tokio::task::spawn_blocking(move || verifier.verify(&request.text))
        .await
        .map_err(|e| {
            error!("Verification task failed: {}", e);
            AppError::InternalError(e.to_string())
        })?
        .map_err(|e| {
            warn!("Rejected verification request: {}", e);
            AppError::from(e)
        })?;

    state.stats.record(&report);
    Ok(Json(VerifyResponse::from(&report)))
}

/// POST /analyze - Whole-text engine breakdown without segmentation
async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    state.verifier.validate_input(&request.text)?;

    let verifier = Arc::clone(&state.verifier);
    let result = tokio::task::spawn_blocking(move || verifier.engine().score(&request.text))
        .await
        .map_err(|e| {
            error!("Analysis task failed: {}", e);
            AppError::InternalError(e.to_string())
        })?;

    Ok(Json(AnalyzeResponse::from(&result)))
}

/// GET / - Service descriptor
async fn root() -> Json<ServiceInfo> {
    let endpoints = [
        ("verify", "POST /verify"),
        ("analyze", "POST /analyze"),
        ("health", "GET /health"),
        ("stats", "GET /stats"),
        ("model_info", "GET /model-info"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    Json(ServiceInfo {
        service: "TruthLens".to_string(),
        version: API_VERSION.to_string(),
        status: "operational".to_string(),
        description: "AI hallucination detection".to_string(),
        endpoints,
    })
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        model: "loaded".to_string(),
        api_version: API_VERSION.to_string(),
    })
}

/// GET /stats - Counters since process start
async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let snapshot = state.stats.snapshot();

    Json(StatsResponse {
        total_verifications: snapshot.total_verifications,
        hallucinations_detected: snapshot.hallucinations_detected,
        claims_analyzed: snapshot.claims_analyzed,
        claims_verified: snapshot.claims_verified,
        average_processing_time: snapshot.average_processing_time,
        uptime_seconds: snapshot.uptime_seconds,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /model-info - Ensemble weights and thresholds in effect
async fn model_info(State(state): State<AppState>) -> Json<ModelInfoResponse> {
    let config = state.verifier.engine().config();
    let w = &config.weights;

    let weights = [
        ("linguistic", w.linguistic),
        ("semantic", w.semantic),
        ("factual", w.factual),
    ];

    Json(ModelInfoResponse {
        model_type: "Heuristic Ensemble".to_string(),
        version: API_VERSION.to_string(),
        sub_models: weights.iter().map(|(name, _)| name.to_string()).collect(),
        weights: weights
            .iter()
            .map(|(name, weight)| (name.to_string(), *weight))
            .collect(),
        high_confidence_threshold: config.thresholds.high_confidence,
        medium_confidence_threshold: config.thresholds.medium_confidence,
        verified_threshold: config.verified_threshold,
    })
}

/// Fallback for unknown routes
async fn not_found() -> (StatusCode, Json<NotFoundResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            error: "Endpoint not found".to_string(),
            message: "The requested endpoint does not exist".to_string(),
            available_endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
        }),
    )
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/", get(root))
        .route("/verify", post(verify))
        .route("/analyze", post(analyze))
        .route("/health", get(health_check))
        .route("/stats", get(stats))
        .route("/model-info", get(model_info))
        .fallback(not_found)
        .with_state(state)
}
