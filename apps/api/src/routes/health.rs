use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports service version and whether each external credential is present,
/// without revealing the credential values.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "resume-jobs-api",
        "version": env!("CARGO_PKG_VERSION"),
        "llm": configured_label(state.config.gemini_api_key.is_some()),
        "job_search": configured_label(state.config.rapidapi_key.is_some()),
    }))
}

fn configured_label(present: bool) -> &'static str {
    if present {
        "configured"
    } else {
        "not configured"
    }
}
