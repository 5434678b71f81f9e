use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::error::DysRiskError;
use crate::service::AssessmentService;
use crate::types::{AssessmentReport, PredictionSet, RiskAssessment, RiskLevel};

/// API State
#[derive(Clone)]
pub struct ApiState {
    pub service: Arc<AssessmentService>,
}

/// Request body for a direct assessment
#[derive(Debug, Deserialize)]
pub struct AssessRequest {
    #[serde(default)]
    pub classification_a: Option<String>,
    #[serde(default)]
    pub classification_b: Option<String>,
    pub age: i64,
    #[serde(default)]
    pub is_smoker: bool,
    #[serde(default)]
    pub is_alcoholic: bool,
}

/// Response for an assessment
#[derive(Debug, Serialize, Deserialize)]
pub struct AssessResponse {
    pub label: String,
    pub level: RiskLevel,
    pub notes: Vec<String>,
    pub notes_text: String,
}

impl From<RiskAssessment> for AssessResponse {
    fn from(assessment: RiskAssessment) -> Self {
        Self {
            notes_text: assessment.notes_text(),
            label: assessment.label,
            level: assessment.level,
            notes: assessment.notes,
        }
    }
}

/// Request body for a report built from raw classifier output
#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub predictions_a: PredictionSet,
    #[serde(default)]
    pub predictions_b: PredictionSet,
    pub age: i64,
    #[serde(default)]
    pub is_smoker: bool,
    #[serde(default)]
    pub is_alcoholic: bool,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create REST API router
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/assess", post(assess))
        .route("/report", post(report))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Assessment endpoint
async fn assess(
    State(state): State<ApiState>,
    Json(payload): Json<AssessRequest>,
) -> Result<Json<AssessResponse>, AppError> {
    info!("API: Assessing (age={})", payload.age);

    let patient = state
        .service
        .patient(payload.age, payload.is_smoker, payload.is_alcoholic)?;

    let assessment = state.service.assess(
        payload.classification_a.as_deref(),
        payload.classification_b.as_deref(),
        &patient,
    )?;

    Ok(Json(assessment.into()))
}

/// Report data endpoint
async fn report(
    State(state): State<ApiState>,
    Json(payload): Json<ReportRequest>,
) -> Result<Json<AssessmentReport>, AppError> {
    info!(
        "API: Building report from {} + {} predictions",
        payload.predictions_a.predictions.len(),
        payload.predictions_b.predictions.len()
    );

    let patient = state
        .service
        .patient(payload.age, payload.is_smoker, payload.is_alcoholic)?;

    let report = state
        .service
        .assess_predictions(payload.predictions_a, payload.predictions_b, patient)?;

    Ok(Json(report))
}

/// API error wrapper
pub enum AppError {
    InvalidInput(DysRiskError),
    Internal(DysRiskError),
}

impl From<DysRiskError> for AppError {
    fn from(err: DysRiskError) -> Self {
        if err.is_invalid_input() {
            AppError::InvalidInput(err)
        } else {
            AppError::Internal(err)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::InvalidInput(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Internal(e) => {
                error!("Assessment failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Assessment error: {}", e),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
