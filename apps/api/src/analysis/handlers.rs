//! Axum route handlers for the analysis API.

use axum::extract::{Multipart, State};
use axum::Json;
use tracing::warn;

use crate::analysis::{AnalyzeRequest, MatchResult};
use crate::errors::AppError;
use crate::extract::extract_resume_text;
use crate::state::AppState;

/// POST /api/analyze
///
/// Plain-text analysis. Always succeeds for a well-formed JSON body; empty
/// texts are ordinary low-signal input, not errors.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<MatchResult> {
    Json(state.analyzer.analyze(&request).await)
}

/// POST /api/analyze-upload
///
/// Multipart analysis: `resume_file` (binary upload) + `job_description`
/// (text field). Unreadable upload content degrades to an empty resume
/// string; a missing `job_description` field is the only client error.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchResult>, AppError> {
    let mut resume_text = String::new();
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        match field.name() {
            Some("resume_file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                match field.bytes().await {
                    Ok(bytes) => resume_text = extract_resume_text(&filename, &bytes),
                    Err(e) => {
                        // degraded input, not an error: analyze what we have
                        warn!("failed to read resume upload: {e}");
                        resume_text = String::new();
                    }
                }
            }
            Some("job_description") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("unreadable job_description: {e}")))?;
                job_description = Some(text);
            }
            _ => {}
        }
    }

    let job_description = job_description
        .ok_or_else(|| AppError::Validation("job_description field is required".to_string()))?;

    let request = AnalyzeRequest {
        resume_text,
        job_description,
    };
    Ok(Json(state.analyzer.analyze(&request).await))
}
