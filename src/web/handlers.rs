//! HTTP handlers.

use super::AppState;
use crate::preflight::{self, CheckResult, FailureReason, SETUP_STEPS};
use axum::{extract::State, http::StatusCode, response::Html, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/check`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_count: Option<usize>,
    /// `missing_key` or `exception` on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub checked_at: DateTime<Utc>,
}

impl From<&CheckResult> for CheckResponse {
    fn from(result: &CheckResult) -> Self {
        let reason = match result {
            CheckResult::Success { .. } => None,
            CheckResult::Failure(FailureReason::MissingKey) => Some("missing_key"),
            CheckResult::Failure(FailureReason::ExceptionMessage(_)) => Some("exception"),
        };

        Self {
            success: result.is_success(),
            message: result.message(),
            index_count: result.index_count(),
            reason: reason.map(str::to_string),
            checked_at: Utc::now(),
        }
    }
}

/// Body of `GET /api/status`.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub api_key_present: bool,
    pub message: String,
    pub setup_steps: Vec<String>,
}

/// Serve the main page.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Liveness probe.
pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

/// Report whether an API key is configured right now.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let key_status = (state.credentials)().key_status();

    Json(StatusResponse {
        api_key_present: key_status.is_present(),
        message: key_status.message().to_string(),
        setup_steps: SETUP_STEPS.iter().map(|s| s.to_string()).collect(),
    })
}

/// Run one connectivity check. Failures are reported in the body, never as
/// an HTTP error.
pub async fn run_check(State(state): State<AppState>) -> Json<CheckResponse> {
    let credentials = (state.credentials)();
    let result = preflight::pinecone::check(&credentials, state.connector.as_ref()).await;
    Json(CheckResponse::from(&result))
}
