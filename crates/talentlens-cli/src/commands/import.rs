//! Import command - pull resumes from the configured remote folder.

use super::{format_score, get_database, load_config};
use anyhow::{Context, Result};
use colored::Colorize;
use talentlens_ingest::{FolderSource, Pipeline};
use tokio::runtime::Runtime;

pub fn run(folder: Option<&str>, provider: Option<&str>) -> Result<()> {
    let db = get_database()?;
    let config = load_config()?;
    let pipeline = Pipeline::new(db, &config);
    let source = FolderSource::from_config(&config.remote);

    println!("{}", "Importing from remote folder...".cyan());

    let rt = Runtime::new().context("Failed to create async runtime")?;
    let resumes = rt.block_on(pipeline.import_remote(&source, folder, provider))?;

    if resumes.is_empty() {
        println!("{}", "No resume documents found to import.".yellow());
        return Ok(());
    }

    println!(
        "{} {} resume(s)",
        "Imported:".green().bold(),
        resumes.len()
    );
    for resume in &resumes {
        let name = if resume.candidate_name.is_empty() {
            resume.file_name.as_str()
        } else {
            resume.candidate_name.as_str()
        };
        println!(
            "  {} {} ({})",
            format_score(resume.match_score),
            name.white().bold(),
            resume.file_name
        );
    }

    Ok(())
}
