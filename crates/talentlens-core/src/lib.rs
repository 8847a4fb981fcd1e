//! TalentLens Core - Domain types for the resume screening pipeline.

mod types;

pub use types::*;
