//! Axum handler for the resume upload endpoint.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::extract::{extract_text, FileKind};
use crate::pipeline::aggregator::{run_pipeline, AnalysisResponse};
use crate::state::AppState;

/// POST /api/upload-resume
///
/// Accepts a multipart upload with a `file` field (.pdf or .docx), extracts
/// its text, and runs the full analysis pipeline. The extension and
/// minimum-content gates both fire before any model call is made.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .ok_or_else(|| AppError::Validation("Upload is missing a filename".to_string()))?
            .to_string();

        // Extension gate fires before the body is read.
        let kind = FileKind::from_filename(&filename)?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        info!("Received {} ({} bytes)", filename, data.len());

        let text = extract_text(&data, kind)?;

        let response = run_pipeline(&text, &state).await?;
        return Ok(Json(response));
    }

    Err(AppError::Validation(
        "Missing 'file' field in multipart upload".to_string(),
    ))
}
