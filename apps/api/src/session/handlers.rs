//! Axum route handlers for session lifecycle and the Section Collector.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extractor::extract_resume_text;
use crate::models::resume::{
    ContactInfo, EducationEntry, InputLanguage, JobEntry, OutputFormat, OutputStyle, ProjectEntry,
    SectionCounts,
};
use crate::session::{OutputSettings, RecordUpdate, ResumeSession};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

/// Snapshot of a session for the client: the record view (entry lists sized
/// to the configured counts) plus counts, settings, and pipeline state.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub contact: ContactInfo,
    pub summary: String,
    pub jobs: Vec<JobEntry>,
    pub projects: Vec<ProjectEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: String,
    pub certifications: String,
    pub languages: String,
    pub counts: SectionCounts,
    pub settings: OutputSettings,
    pub resume_text: String,
    pub has_refined_output: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionView {
    fn from_session(session_id: Uuid, session: &ResumeSession) -> Self {
        let record = session.record();
        SessionView {
            session_id,
            contact: record.contact,
            summary: record.summary,
            jobs: record.jobs,
            projects: record.projects,
            education: record.education,
            skills: record.skills,
            certifications: record.certifications,
            languages: record.languages,
            counts: session.counts,
            settings: session.settings,
            resume_text: session.resume_text.clone(),
            has_refined_output: session.refined_output.is_some(),
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CountsUpdate {
    pub jobs: Option<usize>,
    pub projects: Option<usize>,
    pub education: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SettingsUpdate {
    pub input_language: Option<InputLanguage>,
    pub output_style: Option<OutputStyle>,
    pub output_format: Option<OutputFormat>,
    pub hide_contact: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct SetTextRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub extracted_text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Session lifecycle
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreateSessionResponse>) {
    let session_id = state.sessions.create().await;
    info!("Created session {session_id}");
    (
        StatusCode::CREATED,
        Json(CreateSessionResponse { session_id }),
    )
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(Json(SessionView::from_session(id, &session)))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        info!("Discarded session {id}");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {id} not found")))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section Collector
// ────────────────────────────────────────────────────────────────────────────

/// PUT /api/v1/sessions/:id/record
pub async fn handle_update_record(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<RecordUpdate>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .update(id, |session| session.apply_record(update))
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/sessions/:id/counts
///
/// Bounds-checked; an out-of-range count leaves the session untouched.
pub async fn handle_update_counts(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<CountsUpdate>,
) -> Result<Json<SectionCounts>, AppError> {
    state
        .sessions
        .update(id, |session| {
            let merged = SectionCounts {
                jobs: update.jobs.unwrap_or(session.counts.jobs),
                projects: update.projects.unwrap_or(session.counts.projects),
                education: update.education.unwrap_or(session.counts.education),
            };
            merged.validate().map_err(AppError::Validation)?;
            session.counts = merged;
            Ok(Json(merged))
        })
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?
}

/// PATCH /api/v1/sessions/:id/settings
pub async fn handle_update_settings(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(update): Json<SettingsUpdate>,
) -> Result<Json<OutputSettings>, AppError> {
    state
        .sessions
        .update(id, |session| {
            if let Some(language) = update.input_language {
                session.settings.input_language = language;
            }
            if let Some(style) = update.output_style {
                session.settings.output_style = style;
            }
            if let Some(format) = update.output_format {
                session.settings.output_format = format;
            }
            if let Some(hide_contact) = update.hide_contact {
                session.settings.hide_contact = hide_contact;
            }
            Json(session.settings)
        })
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
}

/// PUT /api/v1/sessions/:id/text
///
/// Sets the working resume text directly: pasted content, hand edits, or an
/// adopted extraction result.
pub async fn handle_set_text(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SetTextRequest>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .update(id, |session| session.resume_text = request.resume_text)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Document extraction
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/extract
///
/// Multipart upload of one PDF under the `file` field. Returns the extracted
/// text for the client to review and adopt; the working text is not touched.
pub async fn handle_extract(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    if state.sessions.get(id).await.is_none() {
        return Err(AppError::NotFound(format!("Session {id} not found")));
    }

    let mut payload: Option<Bytes> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() == Some("file") {
            payload = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?,
            );
        }
    }

    let payload =
        payload.ok_or_else(|| AppError::Validation("Missing `file` field".to_string()))?;

    let extracted_text = extract_resume_text(&payload)?;
    info!(
        "Extracted {} characters from upload for session {id}",
        extracted_text.len()
    );

    Ok(Json(ExtractResponse { extracted_text }))
}
