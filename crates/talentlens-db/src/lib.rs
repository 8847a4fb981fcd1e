//! TalentLens DB - SQLite storage for resumes and job profiles.

mod database;
mod error;
mod migrations;
mod operations;

pub use database::Database;
pub use error::{DbError, DbResult};
