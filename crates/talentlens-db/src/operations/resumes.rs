//! Resume CRUD operations.

use crate::database::Database;
use crate::error::{DbError, DbResult};
use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use talentlens_core::{IngestSource, Resume};

fn parse_timestamp(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

fn row_to_resume(row: &Row<'_>) -> rusqlite::Result<Resume> {
    let source_str: String = row.get(3)?;
    let uploaded_at_str: String = row.get(13)?;
    let analyzed_at_str: String = row.get(14)?;

    Ok(Resume {
        id: row.get(0)?,
        file_name: row.get(1)?,
        mime_type: row.get(2)?,
        source: IngestSource::from_str(&source_str).unwrap_or(IngestSource::Upload),
        remote_id: row.get(4)?,
        extracted_text: row.get(5)?,
        candidate_name: row.get(6)?,
        email: row.get(7)?,
        phone: row.get(8)?,
        skills: row.get(9)?,
        experience: row.get(10)?,
        match_score: row.get(11)?,
        match_analysis: row.get(12)?,
        uploaded_at: parse_timestamp(&uploaded_at_str),
        analyzed_at: parse_timestamp(&analyzed_at_str),
    })
}

const RESUME_COLUMNS: &str = "id, file_name, mime_type, source, remote_id, extracted_text, \
     candidate_name, email, phone, skills, experience, match_score, match_analysis, \
     uploaded_at, analyzed_at";

impl Database {
    /// Persist a new resume record.
    pub fn create_resume(&self, resume: &Resume) -> DbResult<()> {
        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO resumes
                (id, file_name, mime_type, source, remote_id, extracted_text,
                 candidate_name, email, phone, skills, experience,
                 match_score, match_analysis, uploaded_at, analyzed_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
            "#,
            params![
                resume.id,
                resume.file_name,
                resume.mime_type,
                resume.source.as_str(),
                resume.remote_id,
                resume.extracted_text,
                resume.candidate_name,
                resume.email,
                resume.phone,
                resume.skills,
                resume.experience,
                resume.match_score,
                resume.match_analysis,
                resume.uploaded_at.to_rfc3339(),
                resume.analyzed_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Get a resume by ID.
    pub fn get_resume(&self, id: &str) -> DbResult<Resume> {
        let conn = self.conn()?;
        conn.query_row(
            &format!("SELECT {RESUME_COLUMNS} FROM resumes WHERE id = ?1"),
            params![id],
            row_to_resume,
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => {
                DbError::NotFound(format!("Resume not found: {}", id))
            }
            _ => DbError::from(e),
        })
    }

    /// List resumes ordered by descending match score, optionally filtered
    /// by ingestion source.
    pub fn list_resumes_ranked(&self, source: Option<IngestSource>) -> DbResult<Vec<Resume>> {
        let conn = self.conn()?;

        let sql = match source {
            Some(_) => format!(
                "SELECT {RESUME_COLUMNS} FROM resumes WHERE source = ?1 ORDER BY match_score DESC"
            ),
            None => format!("SELECT {RESUME_COLUMNS} FROM resumes ORDER BY match_score DESC"),
        };

        let mut stmt = conn.prepare(&sql)?;

        let resumes = if let Some(src) = source {
            stmt.query_map(params![src.as_str()], row_to_resume)?
                .collect::<Result<Vec<_>, _>>()
        } else {
            stmt.query_map([], row_to_resume)?
                .collect::<Result<Vec<_>, _>>()
        };

        resumes.map_err(DbError::from)
    }

    /// Delete a resume by ID.
    pub fn delete_resume(&self, id: &str) -> DbResult<()> {
        let conn = self.conn()?;
        let rows = conn.execute("DELETE FROM resumes WHERE id = ?1", params![id])?;

        if rows == 0 {
            return Err(DbError::NotFound(format!("Resume not found: {}", id)));
        }

        Ok(())
    }
}
