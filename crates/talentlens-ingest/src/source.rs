//! Remote file sources for resume import.

use crate::error::{IngestError, IngestResult};
use crate::extract::DocumentFormat;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use talentlens_config::RemoteConfig;
use talentlens_core::RemoteFile;
use tracing::debug;

/// A browsable store of candidate documents outside the local upload path.
pub trait FileSource {
    /// List resume documents, optionally under a specific folder.
    fn list(&self, folder_id: Option<&str>) -> IngestResult<Vec<RemoteFile>>;

    /// Fetch the raw bytes of one listed document.
    fn download(&self, id: &str) -> IngestResult<Vec<u8>>;
}

/// File source backed by a directory on disk, typically a synced share.
pub struct FolderSource {
    enabled: bool,
    folder: Option<PathBuf>,
}

impl FolderSource {
    pub fn from_config(config: &RemoteConfig) -> Self {
        Self {
            enabled: config.enabled,
            folder: config.folder.as_ref().map(PathBuf::from),
        }
    }

    pub fn new(enabled: bool, folder: Option<PathBuf>) -> Self {
        Self { enabled, folder }
    }

    fn ensure_enabled(&self) -> IngestResult<()> {
        if self.enabled {
            Ok(())
        } else {
            Err(IngestError::RemoteNotEnabled)
        }
    }
}

impl FileSource for FolderSource {
    fn list(&self, folder_id: Option<&str>) -> IngestResult<Vec<RemoteFile>> {
        self.ensure_enabled()?;

        let dir = folder_id
            .map(PathBuf::from)
            .or_else(|| self.folder.clone())
            .ok_or_else(|| {
                IngestError::Remote("no remote folder configured".to_string())
            })?;

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let extension = path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("");
            let Some(format) = DocumentFormat::from_extension(extension) else {
                debug!("Skipping non-resume file: {}", path.display());
                continue;
            };

            let metadata = entry.metadata()?;
            let modified_time = metadata
                .modified()
                .ok()
                .map(|t| DateTime::<Utc>::from(t).to_rfc3339());

            files.push(RemoteFile {
                id: path.to_string_lossy().into_owned(),
                name: entry.file_name().to_string_lossy().into_owned(),
                mime_type: format.mime_type().to_string(),
                size: metadata.len(),
                modified_time,
            });
        }

        // Stable order regardless of directory iteration order.
        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }

    fn download(&self, id: &str) -> IngestResult<Vec<u8>> {
        self.ensure_enabled()?;
        Ok(std::fs::read(id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_source_refuses_listing() {
        let source = FolderSource::new(false, Some(PathBuf::from("/tmp")));
        let err = source.list(None).unwrap_err();
        assert!(matches!(err, IngestError::RemoteNotEnabled));
    }

    #[test]
    fn test_missing_folder_is_an_error() {
        let source = FolderSource::new(true, None);
        let err = source.list(None).unwrap_err();
        assert!(matches!(err, IngestError::Remote(_)));
    }

    #[test]
    fn test_lists_only_resume_documents() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.pdf"), b"pdf").unwrap();
        std::fs::write(dir.path().join("a.docx"), b"docx").unwrap();
        std::fs::write(dir.path().join("readme.md"), b"text").unwrap();

        let source = FolderSource::new(true, Some(dir.path().to_path_buf()));
        let files = source.list(None).unwrap();

        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.docx", "b.pdf"]);
        assert!(files[0].modified_time.is_some());
    }

    #[test]
    fn test_download_returns_listed_bytes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cv.pdf"), b"pdf bytes").unwrap();

        let source = FolderSource::new(true, Some(dir.path().to_path_buf()));
        let files = source.list(None).unwrap();
        let bytes = source.download(&files[0].id).unwrap();
        assert_eq!(bytes, b"pdf bytes");
    }
}
