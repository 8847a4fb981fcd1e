//! Database CRUD operations.

pub mod profiles;
pub mod resumes;
