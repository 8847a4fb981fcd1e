//! TalentLens Ingest - Resume ingestion and analysis pipeline.
//!
//! Takes documents from direct uploads, ZIP archives, or a remote file
//! source, extracts their text, scores them against the active job profile
//! through a configured AI provider, and persists the results.

mod archive;
mod error;
mod extract;
mod pipeline;
mod source;

pub use archive::{read_archive_entries, ArchiveEntry};
pub use error::{IngestError, IngestResult};
pub use extract::{extract_text, DocumentFormat};
pub use pipeline::{Pipeline, UploadItem};
pub use source::{FileSource, FolderSource};
