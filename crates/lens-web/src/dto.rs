//! Request and response bodies for the JSON API

use serde::{Deserialize, Serialize};

/// POST /api/analyze request body
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Ticker symbol to analyze
    pub ticker: String,
}

/// POST /api/analyze response body
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Full analysis text
    pub analysis: String,
}

/// GET /api/health response body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok" when the server answers
    pub status: &'static str,
    /// Crate version
    pub version: &'static str,
}
