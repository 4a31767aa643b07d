pub mod health;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::state::AppState;

/// Resumes are small; 10 MiB leaves ample headroom over axum's 2 MiB default.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// GET /
/// Root probe kept for frontend smoke checks.
async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Resume Analysis API is running" }))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/upload-resume", post(upload::handle_upload))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
