//! Job profile CRUD operations.

use crate::database::Database;
use crate::error::{DbError, DbResult};
use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use talentlens_core::JobProfile;

fn row_to_profile(row: &Row<'_>) -> rusqlite::Result<JobProfile> {
    let created_at_str: String = row.get(7)?;

    Ok(JobProfile {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        required_skills: row.get(3)?,
        preferred_skills: row.get(4)?,
        experience_level: row.get(5)?,
        active: row.get::<_, i64>(6)? != 0,
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
    })
}

const PROFILE_COLUMNS: &str =
    "id, title, description, required_skills, preferred_skills, experience_level, active, created_at";

impl Database {
    /// Create a new job profile and make it the active one. All previously
    /// stored profiles are deactivated in the same transaction.
    pub fn create_profile(&self, profile: &JobProfile) -> DbResult<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        tx.execute("UPDATE job_profiles SET active = 0", [])?;
        tx.execute(
            r#"
            INSERT INTO job_profiles
                (id, title, description, required_skills, preferred_skills, experience_level, active, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7)
            "#,
            params![
                profile.id,
                profile.title,
                profile.description,
                profile.required_skills,
                profile.preferred_skills,
                profile.experience_level,
                profile.created_at.to_rfc3339(),
            ],
        )?;

        tx.commit()?;
        Ok(())
    }

    /// Get a job profile by ID.
    pub fn get_profile(&self, id: &str) -> DbResult<JobProfile> {
        let conn = self.conn()?;
        conn.query_row(
            &format!("SELECT {PROFILE_COLUMNS} FROM job_profiles WHERE id = ?1"),
            params![id],
            row_to_profile,
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => {
                DbError::NotFound(format!("Job profile not found: {}", id))
            }
            _ => DbError::from(e),
        })
    }

    /// List all job profiles, newest first.
    pub fn list_profiles(&self) -> DbResult<Vec<JobProfile>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {PROFILE_COLUMNS} FROM job_profiles ORDER BY created_at DESC"
        ))?;

        let profiles = stmt.query_map([], row_to_profile)?;
        profiles
            .collect::<Result<Vec<_>, _>>()
            .map_err(DbError::from)
    }

    /// Update the fields of an existing job profile. The active flag is
    /// not touched here; use [`Database::activate_profile`].
    pub fn update_profile(&self, profile: &JobProfile) -> DbResult<()> {
        let conn = self.conn()?;
        let rows = conn.execute(
            r#"
            UPDATE job_profiles
            SET title = ?2, description = ?3, required_skills = ?4,
                preferred_skills = ?5, experience_level = ?6
            WHERE id = ?1
            "#,
            params![
                profile.id,
                profile.title,
                profile.description,
                profile.required_skills,
                profile.preferred_skills,
                profile.experience_level,
            ],
        )?;

        if rows == 0 {
            return Err(DbError::NotFound(format!(
                "Job profile not found: {}",
                profile.id
            )));
        }

        Ok(())
    }

    /// Make the given profile the single active one.
    pub fn activate_profile(&self, id: &str) -> DbResult<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        tx.execute("UPDATE job_profiles SET active = 0", [])?;
        let rows = tx.execute(
            "UPDATE job_profiles SET active = 1 WHERE id = ?1",
            params![id],
        )?;

        if rows == 0 {
            return Err(DbError::NotFound(format!("Job profile not found: {}", id)));
        }

        tx.commit()?;
        Ok(())
    }

    /// Find the currently active job profile, if any.
    pub fn find_active_profile(&self) -> DbResult<Option<JobProfile>> {
        let conn = self.conn()?;
        let result = conn.query_row(
            &format!("SELECT {PROFILE_COLUMNS} FROM job_profiles WHERE active = 1 LIMIT 1"),
            [],
            row_to_profile,
        );

        match result {
            Ok(profile) => Ok(Some(profile)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DbError::from(e)),
        }
    }

    /// Delete a job profile by ID, active or not.
    pub fn delete_profile(&self, id: &str) -> DbResult<()> {
        let conn = self.conn()?;
        let rows = conn.execute("DELETE FROM job_profiles WHERE id = ?1", params![id])?;

        if rows == 0 {
            return Err(DbError::NotFound(format!("Job profile not found: {}", id)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile(title: &str) -> JobProfile {
        JobProfile::new(title)
            .with_description("desc")
            .with_required_skills("Java, Spring Boot")
            .with_experience_level("5+ years")
    }

    #[test]
    fn test_create_makes_profile_active() {
        let db = Database::open_in_memory().unwrap();
        let profile = sample_profile("Engineer");
        db.create_profile(&profile).unwrap();

        let active = db.find_active_profile().unwrap().unwrap();
        assert_eq!(active.id, profile.id);
        assert!(active.active);
    }

    #[test]
    fn test_activation_is_exclusive() {
        let db = Database::open_in_memory().unwrap();
        let first = sample_profile("First");
        let second = sample_profile("Second");
        db.create_profile(&first).unwrap();
        db.create_profile(&second).unwrap();

        // Creating the second deactivated the first
        assert_eq!(db.find_active_profile().unwrap().unwrap().id, second.id);

        db.activate_profile(&first.id).unwrap();
        let profiles = db.list_profiles().unwrap();
        let active: Vec<_> = profiles.iter().filter(|p| p.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, first.id);
    }

    #[test]
    fn test_activate_unknown_profile() {
        let db = Database::open_in_memory().unwrap();
        assert!(matches!(
            db.activate_profile("nope"),
            Err(DbError::NotFound(_))
        ));
    }

    #[test]
    fn test_no_active_profile() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.find_active_profile().unwrap().is_none());
    }

    #[test]
    fn test_update_and_delete() {
        let db = Database::open_in_memory().unwrap();
        let mut profile = sample_profile("Engineer");
        db.create_profile(&profile).unwrap();

        profile.required_skills = "Rust".to_string();
        db.update_profile(&profile).unwrap();
        assert_eq!(db.get_profile(&profile.id).unwrap().required_skills, "Rust");

        db.delete_profile(&profile.id).unwrap();
        assert!(matches!(
            db.get_profile(&profile.id),
            Err(DbError::NotFound(_))
        ));
    }
}
