//! The ingestion pipeline: extract, analyze, persist.
//!
//! Batch operations isolate failures per document. A failed file is logged
//! and skipped; the rest of the batch continues, and callers get back only
//! the resumes that made it through.

use crate::archive::read_archive_entries;
use crate::error::{IngestError, IngestResult};
use crate::extract::extract_text;
use crate::source::FileSource;
use talentlens_ai::{ProviderRegistry, ResumeAnalyzer};
use talentlens_config::Config;
use talentlens_core::{IngestSource, JobProfile, Resume};
use talentlens_db::Database;
use tracing::{info, warn};

/// One document handed to the pipeline for analysis.
pub struct UploadItem {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Drives documents through extraction, AI analysis against the active
/// job profile, and storage.
pub struct Pipeline {
    db: Database,
    registry: ProviderRegistry,
}

impl Pipeline {
    pub fn new(db: Database, config: &Config) -> Self {
        Self {
            db,
            registry: ProviderRegistry::new(config.ai.clone()),
        }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Every ingest path requires an active profile to score against.
    fn active_profile(&self) -> IngestResult<JobProfile> {
        self.db
            .find_active_profile()?
            .ok_or(IngestError::NoActiveProfile)
    }

    /// Analyze and store a single document. Unlike the batch paths, any
    /// failure here surfaces to the caller.
    pub async fn upload_one(
        &self,
        item: UploadItem,
        provider: Option<&str>,
    ) -> IngestResult<Resume> {
        let client = self.registry.resolve(provider)?;
        self.upload_one_with(&client, item).await
    }

    pub async fn upload_one_with<A: ResumeAnalyzer>(
        &self,
        analyzer: &A,
        item: UploadItem,
    ) -> IngestResult<Resume> {
        let profile = self.active_profile()?;
        self.process_item(
            analyzer,
            &profile.requirements_text(),
            item,
            IngestSource::Upload,
            None,
        )
        .await
    }

    /// Analyze a batch of documents, skipping any that fail.
    pub async fn upload_many(
        &self,
        items: Vec<UploadItem>,
        provider: Option<&str>,
    ) -> IngestResult<Vec<Resume>> {
        let client = self.registry.resolve(provider)?;
        self.upload_many_with(&client, items).await
    }

    pub async fn upload_many_with<A: ResumeAnalyzer>(
        &self,
        analyzer: &A,
        items: Vec<UploadItem>,
    ) -> IngestResult<Vec<Resume>> {
        let profile = self.active_profile()?;
        let requirements = profile.requirements_text();

        let mut resumes = Vec::new();
        for item in items {
            let name = item.file_name.clone();
            match self
                .process_item(analyzer, &requirements, item, IngestSource::Upload, None)
                .await
            {
                Ok(resume) => resumes.push(resume),
                Err(e) => warn!("Error processing file {}: {}", name, e),
            }
        }
        Ok(resumes)
    }

    /// Unpack a ZIP archive and analyze every resume document inside.
    /// Errors out if not a single entry could be processed.
    pub async fn upload_archive(
        &self,
        zip_bytes: &[u8],
        provider: Option<&str>,
    ) -> IngestResult<Vec<Resume>> {
        let client = self.registry.resolve(provider)?;
        self.upload_archive_with(&client, zip_bytes).await
    }

    pub async fn upload_archive_with<A: ResumeAnalyzer>(
        &self,
        analyzer: &A,
        zip_bytes: &[u8],
    ) -> IngestResult<Vec<Resume>> {
        let profile = self.active_profile()?;
        let requirements = profile.requirements_text();

        let entries = read_archive_entries(zip_bytes)?;
        info!("Archive contains {} candidate document(s)", entries.len());

        let mut resumes = Vec::new();
        for entry in entries {
            let name = entry.name.clone();
            let item = UploadItem {
                file_name: entry.name,
                mime_type: entry.mime_type.to_string(),
                bytes: entry.bytes,
            };
            match self
                .process_item(analyzer, &requirements, item, IngestSource::ZipUpload, None)
                .await
            {
                Ok(resume) => resumes.push(resume),
                Err(e) => warn!("Error processing archive entry {}: {}", name, e),
            }
        }

        if resumes.is_empty() {
            return Err(IngestError::NoValidDocuments);
        }
        Ok(resumes)
    }

    /// Import every resume document a remote source lists, skipping
    /// failures. An empty listing imports nothing and is not an error.
    pub async fn import_remote(
        &self,
        source: &impl FileSource,
        folder_id: Option<&str>,
        provider: Option<&str>,
    ) -> IngestResult<Vec<Resume>> {
        let client = self.registry.resolve(provider)?;
        self.import_remote_with(&client, source, folder_id).await
    }

    pub async fn import_remote_with<A: ResumeAnalyzer>(
        &self,
        analyzer: &A,
        source: &impl FileSource,
        folder_id: Option<&str>,
    ) -> IngestResult<Vec<Resume>> {
        let profile = self.active_profile()?;
        let requirements = profile.requirements_text();

        let files = source.list(folder_id)?;
        info!("Remote source listed {} document(s)", files.len());

        let mut resumes = Vec::new();
        for file in files {
            let outcome = match source.download(&file.id) {
                Ok(bytes) => {
                    let item = UploadItem {
                        file_name: file.name.clone(),
                        mime_type: file.mime_type.clone(),
                        bytes,
                    };
                    self.process_item(
                        analyzer,
                        &requirements,
                        item,
                        IngestSource::RemoteImport,
                        Some(file.id.clone()),
                    )
                    .await
                }
                Err(e) => Err(e),
            };

            match outcome {
                Ok(resume) => resumes.push(resume),
                Err(e) => warn!("Error importing remote file {}: {}", file.name, e),
            }
        }
        Ok(resumes)
    }

    /// Resumes ordered by match score, best first, optionally filtered by
    /// how they entered the system.
    pub fn list_ranked(&self, source: Option<IngestSource>) -> IngestResult<Vec<Resume>> {
        Ok(self.db.list_resumes_ranked(source)?)
    }

    async fn process_item<A: ResumeAnalyzer>(
        &self,
        analyzer: &A,
        requirements: &str,
        item: UploadItem,
        source: IngestSource,
        remote_id: Option<String>,
    ) -> IngestResult<Resume> {
        let text = extract_text(&item.bytes, &item.mime_type)?;
        let analysis = analyzer.analyze(&text, requirements).await?;

        info!(
            "Analyzed {} via {}: score {:.1}",
            item.file_name,
            analyzer.provider_name(),
            analysis.match_score
        );

        let mut resume =
            Resume::from_analysis(item.file_name, item.mime_type, source, text, analysis);
        if let Some(id) = remote_id {
            resume = resume.with_remote_id(id);
        }

        self.db.create_resume(&resume)?;
        Ok(resume)
    }
}
