//! Session state: one record-in-progress per interactive session.
//!
//! Field values, section counts, and the working resume text live in an
//! explicit session object passed through the store, created at session
//! start and discarded at session end. Nothing survives a process restart.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::resume::{
    ContactInfo, EducationEntry, InputLanguage, JobEntry, OutputFormat, OutputStyle, ProjectEntry,
    ResumeRecord, SectionCounts,
};

/// Page-level selectors for the refine dispatch. `input_language` is
/// display-only and never consulted by the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    pub input_language: InputLanguage,
    pub output_style: OutputStyle,
    pub output_format: OutputFormat,
    pub hide_contact: bool,
}

/// One collector write: the full set of editable field values.
/// Entry lists overwrite the backing lists positionally from the front.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecordUpdate {
    pub contact: ContactInfo,
    pub summary: String,
    pub jobs: Vec<JobEntry>,
    pub projects: Vec<ProjectEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: String,
    pub certifications: String,
    pub languages: String,
}

/// The mutable per-session record-in-progress.
///
/// Backing entry lists never shrink when a count is lowered, so lowering and
/// raising a count round-trips previously entered values. The record view
/// exposes exactly `counts` entries, padding with empty entries where the
/// backing list is shorter.
#[derive(Debug, Clone)]
pub struct ResumeSession {
    pub contact: ContactInfo,
    pub summary: String,
    jobs: Vec<JobEntry>,
    projects: Vec<ProjectEntry>,
    education: Vec<EducationEntry>,
    pub skills: String,
    pub certifications: String,
    pub languages: String,
    pub counts: SectionCounts,
    /// The editable text block fed to the prompt: either an assembled record
    /// or pasted/extracted text.
    pub resume_text: String,
    /// Last completion output, kept for the download route.
    pub refined_output: Option<String>,
    pub settings: OutputSettings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResumeSession {
    pub fn new() -> Self {
        let now = Utc::now();
        ResumeSession {
            contact: ContactInfo::default(),
            summary: String::new(),
            jobs: Vec::new(),
            projects: Vec::new(),
            education: Vec::new(),
            skills: String::new(),
            certifications: String::new(),
            languages: String::new(),
            counts: SectionCounts::default(),
            resume_text: String::new(),
            refined_output: None,
            settings: OutputSettings::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Writes one round of collected field values into the session.
    /// Backing list entries beyond the submitted prefix are kept as-is.
    pub fn apply_record(&mut self, update: RecordUpdate) {
        self.contact = update.contact;
        self.summary = update.summary;
        overwrite_prefix(&mut self.jobs, update.jobs);
        overwrite_prefix(&mut self.projects, update.projects);
        overwrite_prefix(&mut self.education, update.education);
        self.skills = update.skills;
        self.certifications = update.certifications;
        self.languages = update.languages;
    }

    /// Builds the immutable record for serialization: exactly `counts`
    /// entries per section, in entry order.
    pub fn record(&self) -> ResumeRecord {
        ResumeRecord {
            contact: self.contact.clone(),
            summary: self.summary.clone(),
            jobs: take_padded(&self.jobs, self.counts.jobs),
            projects: take_padded(&self.projects, self.counts.projects),
            education: take_padded(&self.education, self.counts.education),
            skills: self.skills.clone(),
            certifications: self.certifications.clone(),
            languages: self.languages.clone(),
        }
    }
}

impl Default for ResumeSession {
    fn default() -> Self {
        Self::new()
    }
}

fn overwrite_prefix<T>(backing: &mut Vec<T>, submitted: Vec<T>) {
    for (i, value) in submitted.into_iter().enumerate() {
        if i < backing.len() {
            backing[i] = value;
        } else {
            backing.push(value);
        }
    }
}

fn take_padded<T: Clone + Default>(backing: &[T], n: usize) -> Vec<T> {
    (0..n)
        .map(|i| backing.get(i).cloned().unwrap_or_default())
        .collect()
}

/// In-process session store keyed by session id.
///
/// Guarded by an async `RwLock`; mutations touch `updated_at`. The remote
/// completion call is never made while a guard is held.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, ResumeSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.inner.write().await.insert(id, ResumeSession::new());
        id
    }

    pub async fn get(&self, id: Uuid) -> Option<ResumeSession> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Runs `f` against the session under the write lock.
    /// Returns `None` for an unknown session.
    pub async fn update<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut ResumeSession) -> T,
    ) -> Option<T> {
        let mut guard = self.inner.write().await;
        let session = guard.get_mut(&id)?;
        let result = f(session);
        session.updated_at = Utc::now();
        Some(result)
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }
}
