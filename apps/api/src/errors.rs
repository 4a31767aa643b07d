use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Only PDF and DOCX files are allowed")]
    UnsupportedFormat,

    #[error("Could not extract sufficient text from the resume")]
    InsufficientContent,

    #[error("Validation error: {0}")]
    Validation(String),

    /// The model produced output that could not be parsed into the declared
    /// schema, even after fence-strip recovery. Carries the raw text for
    /// diagnostics; the raw text is logged, never echoed to the caller.
    #[error("Model returned malformed structured output")]
    ModelOutputMalformed { raw: String },

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::UnsupportedFormat => (
                StatusCode::BAD_REQUEST,
                "UNSUPPORTED_FORMAT",
                self.to_string(),
            ),
            AppError::InsufficientContent => (
                StatusCode::BAD_REQUEST,
                "INSUFFICIENT_CONTENT",
                self.to_string(),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::ModelOutputMalformed { raw } => {
                // Truncate: model output can be arbitrarily large.
                let preview: String = raw.chars().take(500).collect();
                tracing::error!("Malformed model output: {preview}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MODEL_OUTPUT_MALFORMED",
                    "The AI model returned unparseable output. Please resubmit.".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    format!("Error processing resume: {e}"),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
