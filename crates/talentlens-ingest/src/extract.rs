//! Text extraction from resume documents.
//!
//! PDF text comes from `pdf-extract`. DOCX files are ZIP containers whose
//! `word/document.xml` holds the text inside `w:t` elements. Legacy `.doc`
//! files get a best-effort salvage of readable runs from the binary stream.

use crate::error::{IngestError, IngestResult};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

/// Document formats the pipeline accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Doc,
}

impl DocumentFormat {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(DocumentFormat::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(DocumentFormat::Docx)
            }
            "application/msword" => Some(DocumentFormat::Doc),
            _ => None,
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            "doc" => Some(DocumentFormat::Doc),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "application/pdf",
            DocumentFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            DocumentFormat::Doc => "application/msword",
        }
    }
}

/// Extract plain text from a document, dispatching on MIME type.
pub fn extract_text(bytes: &[u8], mime_type: &str) -> IngestResult<String> {
    let format = DocumentFormat::from_mime(mime_type)
        .ok_or_else(|| IngestError::UnsupportedFileType(mime_type.to_string()))?;

    match format {
        DocumentFormat::Pdf => extract_pdf(bytes),
        DocumentFormat::Docx => extract_docx(bytes),
        DocumentFormat::Doc => extract_doc(bytes),
    }
}

fn extract_pdf(bytes: &[u8]) -> IngestResult<String> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| IngestError::Extraction(format!("PDF parse error: {}", e)))?;
    Ok(clean_text(&text))
}

fn extract_docx(bytes: &[u8]) -> IngestResult<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut document = archive
        .by_name("word/document.xml")
        .map_err(|e| IngestError::Extraction(format!("not a DOCX container: {}", e)))?;

    let mut xml = String::new();
    document.read_to_string(&mut xml)?;

    document_xml_text(&xml)
}

/// Pull text out of a WordprocessingML document body. `w:t` elements carry
/// text runs; a `w:p` close ends a paragraph.
fn document_xml_text(xml: &str) -> IngestResult<String> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text_run => {
                let run = e
                    .unescape()
                    .map_err(|err| IngestError::Extraction(format!("invalid XML text: {}", err)))?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(IngestError::Extraction(format!(
                    "malformed document.xml: {}",
                    e
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(clean_text(&text))
}

/// Legacy Word binaries. Some files with a `.doc` name are really DOCX, so
/// try that first, then fall back to salvaging readable runs.
fn extract_doc(bytes: &[u8]) -> IngestResult<String> {
    if let Ok(text) = extract_docx(bytes) {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    let salvaged = salvage_readable_runs(bytes);
    if salvaged.trim().is_empty() {
        return Err(IngestError::Extraction(
            "could not recover text from legacy .doc file".to_string(),
        ));
    }
    Ok(salvaged)
}

/// Minimum run length kept by the `.doc` salvage pass. Shorter runs are
/// almost always binary noise.
const MIN_RUN_LEN: usize = 4;

fn salvage_readable_runs(bytes: &[u8]) -> String {
    // Word 97 stores text as UTF-16LE; dropping NULs makes ASCII runs contiguous.
    let filtered: Vec<u8> = bytes.iter().copied().filter(|&b| b != 0).collect();

    let mut out = String::new();
    let mut run = String::new();
    for &b in &filtered {
        if (0x20..0x7f).contains(&b) || b == b'\n' || b == b'\t' {
            run.push(b as char);
        } else {
            flush_run(&mut out, &mut run);
        }
    }
    flush_run(&mut out, &mut run);
    clean_text(&out)
}

fn flush_run(out: &mut String, run: &mut String) {
    let trimmed = run.trim();
    if trimmed.len() >= MIN_RUN_LEN {
        out.push_str(trimmed);
        out.push('\n');
    }
    run.clear();
}

/// Normalize extracted text: strip form feeds, trim trailing space per
/// line, and collapse consecutive blank lines.
fn clean_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_blank = false;

    for line in text.replace('\u{c}', "\n").lines() {
        let line = line.trim_end();
        let blank = line.trim().is_empty();
        if blank && prev_blank {
            continue;
        }
        out.push_str(line);
        out.push('\n');
        prev_blank = blank;
    }

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;

    fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let mut body = String::new();
        for p in paragraphs {
            body.push_str(&format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p));
        }
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>{}</w:body></w:document>"#,
            body
        );

        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            writer
                .start_file("word/document.xml", FileOptions::default())
                .unwrap();
            writer.write_all(xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn test_format_from_mime_and_extension_agree() {
        for (ext, mime) in [
            ("pdf", "application/pdf"),
            (
                "docx",
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ),
            ("doc", "application/msword"),
        ] {
            let from_ext = DocumentFormat::from_extension(ext).unwrap();
            assert_eq!(DocumentFormat::from_mime(mime), Some(from_ext));
            assert_eq!(from_ext.mime_type(), mime);
        }
        assert_eq!(DocumentFormat::from_extension("txt"), None);
        assert_eq!(DocumentFormat::from_mime("text/plain"), None);
    }

    #[test]
    fn test_unsupported_mime_is_rejected() {
        let err = extract_text(b"hello", "text/plain").unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFileType(_)));
    }

    #[test]
    fn test_docx_extraction_preserves_paragraphs() {
        let bytes = docx_bytes(&["John Doe", "Senior Rust Engineer"]);
        let text = extract_text(&bytes, DocumentFormat::Docx.mime_type()).unwrap();
        assert_eq!(text, "John Doe\nSenior Rust Engineer");
    }

    #[test]
    fn test_docx_entities_are_unescaped() {
        let bytes = docx_bytes(&["C&amp;C skills"]);
        let text = extract_text(&bytes, DocumentFormat::Docx.mime_type()).unwrap();
        assert_eq!(text, "C&C skills");
    }

    #[test]
    fn test_doc_salvage_recovers_ascii_runs() {
        let mut bytes = vec![0xd0, 0xcf, 0x11, 0xe0, 0x01, 0x02];
        bytes.extend_from_slice(b"Jane Smith jane@example.com");
        bytes.extend_from_slice(&[0x00, 0x03, 0x04]);
        let text = extract_text(&bytes, DocumentFormat::Doc.mime_type()).unwrap();
        assert!(text.contains("Jane Smith"));
        assert!(text.contains("jane@example.com"));
    }

    #[test]
    fn test_doc_named_docx_still_extracts() {
        let bytes = docx_bytes(&["Mislabeled document"]);
        let text = extract_text(&bytes, DocumentFormat::Doc.mime_type()).unwrap();
        assert_eq!(text, "Mislabeled document");
    }

    #[test]
    fn test_doc_with_no_recoverable_text_fails() {
        let bytes = vec![0x01, 0x02, 0x03, 0x04, 0x05];
        let err = extract_text(&bytes, DocumentFormat::Doc.mime_type()).unwrap_err();
        assert!(matches!(err, IngestError::Extraction(_)));
    }

    #[test]
    fn test_clean_text_collapses_blank_lines() {
        let cleaned = clean_text("a  \n\n\n\nb\n");
        assert_eq!(cleaned, "a\n\nb");
    }
}
