//! Resume record types: the structured aggregate assembled from collected
//! sections, plus the closed selector enums for the refine dispatch.

use serde::{Deserialize, Serialize};

/// Section count bounds. The collector rejects counts outside these ranges.
pub const MIN_JOBS: usize = 1;
pub const MAX_JOBS: usize = 10;
pub const MAX_PROJECTS: usize = 10;
pub const MIN_EDUCATION: usize = 1;
pub const MAX_EDUCATION: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobEntry {
    pub title: String,
    pub company: String,
    pub dates: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub dates: String,
}

/// Independently configurable entry counts for the dynamic sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCounts {
    pub jobs: usize,
    pub projects: usize,
    pub education: usize,
}

impl Default for SectionCounts {
    fn default() -> Self {
        SectionCounts {
            jobs: 1,
            projects: 0,
            education: 1,
        }
    }
}

impl SectionCounts {
    /// Checks every count against its bounds. Returns the first violation.
    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_JOBS..=MAX_JOBS).contains(&self.jobs) {
            return Err(format!(
                "job count must be between {MIN_JOBS} and {MAX_JOBS}, got {}",
                self.jobs
            ));
        }
        if self.projects > MAX_PROJECTS {
            return Err(format!(
                "project count must be at most {MAX_PROJECTS}, got {}",
                self.projects
            ));
        }
        if !(MIN_EDUCATION..=MAX_EDUCATION).contains(&self.education) {
            return Err(format!(
                "education count must be between {MIN_EDUCATION} and {MAX_EDUCATION}, got {}",
                self.education
            ));
        }
        Ok(())
    }
}

/// The full structured record handed to the serializer.
///
/// Invariant: each entry list's length equals the configured count for that
/// section. Built fresh per assemble request; never mutated after that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    pub contact: ContactInfo,
    pub summary: String,
    pub jobs: Vec<JobEntry>,
    pub projects: Vec<ProjectEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: String,
    pub certifications: String,
    pub languages: String,
}

/// Target tone/language of the refined output. Selects exactly one prompt
/// template; the set is closed and matched exhaustively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputStyle {
    #[default]
    JapaneseKeigo,
    JapaneseCasual,
    EnglishProfessional,
    EnglishConcise,
    EnglishLinkedin,
}

/// Output format label substituted into every prompt template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Markdown,
    PlainText,
}

impl OutputFormat {
    /// The label as it appears inside the rendered prompt.
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "Markdown",
            OutputFormat::PlainText => "Plain Text",
        }
    }
}

/// Language of the source resume. Display-only: carried in session settings
/// for the client, never consulted by the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputLanguage {
    #[default]
    English,
    Japanese,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_style_serde_round_trip() {
        for (style, expected) in [
            (OutputStyle::JapaneseKeigo, r#""japanese_keigo""#),
            (OutputStyle::JapaneseCasual, r#""japanese_casual""#),
            (OutputStyle::EnglishProfessional, r#""english_professional""#),
            (OutputStyle::EnglishConcise, r#""english_concise""#),
            (OutputStyle::EnglishLinkedin, r#""english_linkedin""#),
        ] {
            assert_eq!(serde_json::to_string(&style).unwrap(), expected);
            let back: OutputStyle = serde_json::from_str(expected).unwrap();
            assert_eq!(back, style);
        }
    }

    #[test]
    fn test_unknown_output_style_is_rejected() {
        let result: Result<OutputStyle, _> = serde_json::from_str(r#""german_formal""#);
        assert!(result.is_err(), "closed enum must reject unknown styles");
    }

    #[test]
    fn test_output_format_labels() {
        assert_eq!(OutputFormat::Markdown.label(), "Markdown");
        assert_eq!(OutputFormat::PlainText.label(), "Plain Text");
    }

    #[test]
    fn test_unknown_output_format_is_rejected() {
        let result: Result<OutputFormat, _> = serde_json::from_str(r#""html""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_counts_match_form_defaults() {
        let counts = SectionCounts::default();
        assert_eq!(counts.jobs, 1);
        assert_eq!(counts.projects, 0);
        assert_eq!(counts.education, 1);
        assert!(counts.validate().is_ok());
    }

    #[test]
    fn test_counts_bounds() {
        let zero_jobs = SectionCounts {
            jobs: 0,
            ..Default::default()
        };
        assert!(zero_jobs.validate().is_err());

        let too_many_jobs = SectionCounts {
            jobs: 11,
            ..Default::default()
        };
        assert!(too_many_jobs.validate().is_err());

        let too_many_projects = SectionCounts {
            projects: 11,
            ..Default::default()
        };
        assert!(too_many_projects.validate().is_err());

        let zero_education = SectionCounts {
            education: 0,
            ..Default::default()
        };
        assert!(zero_education.validate().is_err());

        let max_everything = SectionCounts {
            jobs: 10,
            projects: 10,
            education: 5,
        };
        assert!(max_everything.validate().is_ok());
    }

    #[test]
    fn test_record_tolerates_partial_json() {
        let record: ResumeRecord = serde_json::from_str(r#"{"summary": "Engineer."}"#).unwrap();
        assert_eq!(record.summary, "Engineer.");
        assert!(record.jobs.is_empty());
        assert_eq!(record.contact, ContactInfo::default());
    }
}
