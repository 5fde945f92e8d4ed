//! Axum route handlers for the refine pipeline: assemble, dispatch, download.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{OutputFormat, OutputStyle};
use crate::refine::serializer::serialize;
use crate::refine::templates::render_prompt;
use crate::state::AppState;

/// Disposition header for the export; the file name is fixed.
const DOWNLOAD_DISPOSITION: &str = "attachment; filename=\"refined_resume.txt\"";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AssembleResponse {
    pub resume_text: String,
}

/// Per-dispatch overrides; session settings apply where a field is omitted.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RefineRequest {
    pub output_style: Option<OutputStyle>,
    pub output_format: Option<OutputFormat>,
    pub hide_contact: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct RefineResponse {
    /// Completion text exactly as returned; whitespace and line breaks are
    /// the model's own.
    pub output: String,
    pub output_style: OutputStyle,
    pub output_format: OutputFormat,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/assemble
///
/// Builds the record from the collected sections, serializes it, and caches
/// the text as the session's working resume text.
pub async fn handle_assemble(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssembleResponse>, AppError> {
    let resume_text = state
        .sessions
        .update(id, |session| {
            let text = serialize(&session.record());
            session.resume_text = text.clone();
            text
        })
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

    Ok(Json(AssembleResponse { resume_text }))
}

/// POST /api/v1/sessions/:id/refine
///
/// The full dispatch: working text → prompt render → one completion call →
/// stored output. Runs to completion per action; the remote call is made
/// without holding the store lock.
pub async fn handle_refine(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RefineRequest>,
) -> Result<Json<RefineResponse>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

    if session.resume_text.trim().is_empty() {
        return Err(AppError::EmptyInput);
    }

    let style = request.output_style.unwrap_or(session.settings.output_style);
    let format = request
        .output_format
        .unwrap_or(session.settings.output_format);
    let hide_contact = request
        .hide_contact
        .unwrap_or(session.settings.hide_contact);

    let prompt = render_prompt(style, &session.resume_text, format, hide_contact);

    info!("Dispatching refine for session {id} (style: {style:?}, format: {format:?})");
    let output = state.llm.complete(&prompt).await?;

    state
        .sessions
        .update(id, |session| {
            session.refined_output = Some(output.clone());
        })
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

    Ok(Json(RefineResponse {
        output,
        output_style: style,
        output_format: format,
    }))
}

/// GET /api/v1/sessions/:id/download
///
/// The last refined output as a plain-text attachment under the fixed file
/// name. The bytes are exactly what the refine call returned.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(HeaderMap, String), AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

    let output = session
        .refined_output
        .ok_or_else(|| AppError::NotFound("No refined output to download yet".to_string()))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static(DOWNLOAD_DISPOSITION),
    );

    Ok((headers, output))
}
