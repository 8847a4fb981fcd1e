//! Core domain types for TalentLens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for job profiles.
pub type ProfileId = String;

/// Unique identifier for resumes.
pub type ResumeId = String;

/// Generate a new unique ID.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Neutral match score used when a provider response carries no usable score.
pub const DEFAULT_MATCH_SCORE: f64 = 50.0;

/// Channel through which a document entered the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestSource {
    Upload,
    ZipUpload,
    RemoteImport,
}

impl IngestSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            IngestSource::Upload => "upload",
            IngestSource::ZipUpload => "zip_upload",
            IngestSource::RemoteImport => "remote_import",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "upload" => Some(IngestSource::Upload),
            "zip_upload" | "zip" => Some(IngestSource::ZipUpload),
            "remote_import" | "remote" => Some(IngestSource::RemoteImport),
            _ => None,
        }
    }
}

impl std::fmt::Display for IngestSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Hiring criteria a resume is scored against. Exactly one profile is
/// active at a time; activation deactivates all others.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobProfile {
    pub id: ProfileId,
    pub title: String,
    pub description: String,
    pub required_skills: String,
    pub preferred_skills: String,
    pub experience_level: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl JobProfile {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            description: String::new(),
            required_skills: String::new(),
            preferred_skills: String::new(),
            experience_level: String::new(),
            active: false,
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_required_skills(mut self, skills: impl Into<String>) -> Self {
        self.required_skills = skills.into();
        self
    }

    pub fn with_preferred_skills(mut self, skills: impl Into<String>) -> Self {
        self.preferred_skills = skills.into();
        self
    }

    pub fn with_experience_level(mut self, level: impl Into<String>) -> Self {
        self.experience_level = level.into();
        self
    }

    /// Render the profile as the job-requirements block embedded in the
    /// analysis prompt.
    pub fn requirements_text(&self) -> String {
        format!(
            "Job Title: {}\n\n\
             Description: {}\n\n\
             Required Skills: {}\n\n\
             Preferred Skills: {}\n\n\
             Experience Level: {}\n",
            self.title,
            self.description,
            self.required_skills,
            self.preferred_skills,
            self.experience_level
        )
    }
}

/// Structured match analysis produced by a provider for one resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub candidate_name: String,
    pub email: String,
    pub phone: String,
    /// 0-100 estimate of candidate fit.
    pub match_score: f64,
    /// Comma-joined skills found in the resume.
    pub extracted_skills: String,
    pub extracted_experience: String,
    /// Narrative assessment of strengths, weaknesses, and fit.
    pub analysis: String,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self {
            candidate_name: String::new(),
            email: String::new(),
            phone: String::new(),
            match_score: DEFAULT_MATCH_SCORE,
            extracted_skills: String::new(),
            extracted_experience: String::new(),
            analysis: String::new(),
        }
    }
}

/// One record per successfully analyzed document. Never mutated after
/// creation; re-analysis creates a new record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub id: ResumeId,
    pub file_name: String,
    pub mime_type: String,
    pub source: IngestSource,
    /// Identifier within the remote file source, when imported.
    pub remote_id: Option<String>,
    pub extracted_text: String,
    pub candidate_name: String,
    pub email: String,
    pub phone: String,
    pub skills: String,
    pub experience: String,
    pub match_score: f64,
    pub match_analysis: String,
    pub uploaded_at: DateTime<Utc>,
    pub analyzed_at: DateTime<Utc>,
}

impl Resume {
    /// Fold an analysis result into a new resume record.
    pub fn from_analysis(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        source: IngestSource,
        extracted_text: impl Into<String>,
        analysis: AnalysisResult,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            source,
            remote_id: None,
            extracted_text: extracted_text.into(),
            candidate_name: analysis.candidate_name,
            email: analysis.email,
            phone: analysis.phone,
            skills: analysis.extracted_skills,
            experience: analysis.extracted_experience,
            match_score: analysis.match_score,
            match_analysis: analysis.analysis,
            uploaded_at: now,
            analyzed_at: now,
        }
    }

    pub fn with_remote_id(mut self, id: impl Into<String>) -> Self {
        self.remote_id = Some(id.into());
        self
    }
}

/// A candidate document listed by the remote file source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteFile {
    pub id: String,
    pub name: String,
    pub mime_type: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub modified_time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_source_roundtrip() {
        for source in [
            IngestSource::Upload,
            IngestSource::ZipUpload,
            IngestSource::RemoteImport,
        ] {
            assert_eq!(IngestSource::from_str(source.as_str()), Some(source));
        }
        assert_eq!(IngestSource::from_str("ftp"), None);
    }

    #[test]
    fn test_requirements_text_contains_all_fields() {
        let profile = JobProfile::new("Backend Engineer")
            .with_description("Builds services")
            .with_required_skills("Rust, SQL")
            .with_preferred_skills("Kubernetes")
            .with_experience_level("Senior");

        let text = profile.requirements_text();
        assert!(text.contains("Backend Engineer"));
        assert!(text.contains("Builds services"));
        assert!(text.contains("Rust, SQL"));
        assert!(text.contains("Kubernetes"));
        assert!(text.contains("Senior"));
    }

    #[test]
    fn test_resume_from_analysis() {
        let analysis = AnalysisResult {
            candidate_name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            match_score: 85.0,
            ..Default::default()
        };

        let resume = Resume::from_analysis(
            "resume.pdf",
            "application/pdf",
            IngestSource::Upload,
            "resume text",
            analysis,
        );

        assert_eq!(resume.candidate_name, "John Doe");
        assert_eq!(resume.email, "john.doe@example.com");
        assert_eq!(resume.match_score, 85.0);
        assert!(resume.remote_id.is_none());
    }

    #[test]
    fn test_default_analysis_uses_neutral_score() {
        assert_eq!(AnalysisResult::default().match_score, DEFAULT_MATCH_SCORE);
    }
}
