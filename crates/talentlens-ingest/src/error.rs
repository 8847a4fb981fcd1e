//! Error types for the ingestion pipeline.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] talentlens_db::DbError),

    #[error("AI provider error: {0}")]
    Provider(#[from] talentlens_ai::AiError),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Text extraction failed: {0}")]
    Extraction(String),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error(
        "No valid resume documents found in archive. \
         Expected PDF or Word documents (.pdf, .doc, .docx)"
    )]
    NoValidDocuments,

    #[error(
        "No active job profile. Create and activate a job profile before uploading resumes"
    )]
    NoActiveProfile,

    #[error(
        "Remote import is not enabled. Set remote.enabled = true in the configuration file"
    )]
    RemoteNotEnabled,

    #[error("Remote source error: {0}")]
    Remote(String),
}

pub type IngestResult<T> = Result<T, IngestError>;
