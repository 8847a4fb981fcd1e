//! ZIP archive handling for bulk resume uploads.

use crate::error::IngestResult;
use crate::extract::DocumentFormat;
use std::io::{Cursor, Read};
use std::path::Path;
use tracing::debug;

/// One resume document pulled out of an uploaded archive.
pub struct ArchiveEntry {
    pub name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Walk a ZIP archive and collect the entries that look like resume
/// documents. Directories and files with other extensions are skipped
/// silently; archive order is preserved.
pub fn read_archive_entries(zip_bytes: &[u8]) -> IngestResult<Vec<ArchiveEntry>> {
    let mut archive = zip::ZipArchive::new(Cursor::new(zip_bytes))?;
    let mut entries = Vec::new();

    for index in 0..archive.len() {
        let mut file = archive.by_index(index)?;
        if file.is_dir() {
            continue;
        }

        let name = file.name().to_string();
        let extension = Path::new(&name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        let Some(format) = DocumentFormat::from_extension(extension) else {
            debug!("Skipping archive entry with unsupported extension: {}", name);
            continue;
        };

        let mut bytes = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut bytes)?;

        entries.push(ArchiveEntry {
            name,
            mime_type: format.mime_type(),
            bytes,
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;

    fn zip_bytes(files: &[(&str, &[u8])]) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            for (name, contents) in files {
                writer.start_file(*name, FileOptions::default()).unwrap();
                writer.write_all(contents).unwrap();
            }
            writer.finish().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn test_filters_to_resume_extensions() {
        let bytes = zip_bytes(&[
            ("alice.pdf", b"pdf bytes".as_slice()),
            ("notes.txt", b"ignore me".as_slice()),
            ("bob.docx", b"docx bytes".as_slice()),
            ("carol.DOC", b"doc bytes".as_slice()),
        ]);

        let entries = read_archive_entries(&bytes).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["alice.pdf", "bob.docx", "carol.DOC"]);
        assert_eq!(entries[0].mime_type, "application/pdf");
    }

    #[test]
    fn test_skips_directories() {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            writer
                .add_directory("resumes/", FileOptions::default())
                .unwrap();
            writer
                .start_file("resumes/dave.pdf", FileOptions::default())
                .unwrap();
            writer.write_all(b"pdf").unwrap();
            writer.finish().unwrap();
        }

        let entries = read_archive_entries(&cursor.into_inner()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "resumes/dave.pdf");
    }

    #[test]
    fn test_empty_archive_yields_no_entries() {
        let bytes = zip_bytes(&[]);
        assert!(read_archive_entries(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_archive_is_an_error() {
        assert!(read_archive_entries(b"not a zip").is_err());
    }
}
