//! JSON API handlers

use crate::dto::{AnalyzeRequest, AnalyzeResponse, HealthResponse};
use crate::error::{ApiError, INPUT_FAILURE_MESSAGE, UPSTREAM_FAILURE_MESSAGE};
use crate::state::AppState;
use axum::{Json, extract::State};
use std::sync::Arc;
use tracing::error;

/// POST /api/analyze - Analyze a ticker
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let ticker = req.ticker.trim().to_uppercase();
    if ticker.is_empty() {
        return Err(ApiError::BadRequest(INPUT_FAILURE_MESSAGE.into()));
    }

    match state.analyst.analyze(&ticker).await {
        Ok(analysis) => Ok(Json(AnalyzeResponse {
            analysis: analysis.text,
        })),
        Err(err) => {
            // Operators get the cause; the caller gets the generic message
            error!(error = %err, %ticker, "analysis failed");
            Err(ApiError::Upstream(UPSTREAM_FAILURE_MESSAGE.into()))
        }
    }
}

/// GET /api/health - Health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
