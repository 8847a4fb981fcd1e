//! Rank command - resumes ordered by match score.

use super::{format_score, get_database, load_config};
use anyhow::Result;
use colored::Colorize;
use talentlens_core::IngestSource;

pub fn run(source: Option<&str>, limit: usize) -> Result<()> {
    let db = get_database()?;
    let config = load_config()?;

    let source_filter = match source {
        Some(s) => Some(
            IngestSource::from_str(s)
                .ok_or_else(|| anyhow::anyhow!("Unknown source: {} (expected upload, zip_upload, or remote_import)", s))?,
        ),
        None => None,
    };

    let resumes = db.list_resumes_ranked(source_filter)?;

    if resumes.is_empty() {
        println!("{}", "No resumes yet.".yellow());
        println!("Upload some with: {}", "talentlens upload resume.pdf".cyan());
        return Ok(());
    }

    println!("{}", "Ranked Resumes".cyan().bold());
    println!("{}", "─".repeat(70));

    for (rank, resume) in resumes.iter().take(limit).enumerate() {
        let name = if resume.candidate_name.is_empty() {
            resume.file_name.as_str()
        } else {
            resume.candidate_name.as_str()
        };

        println!(
            "{:>3}. {} {}",
            rank + 1,
            format_score(resume.match_score),
            name.white().bold()
        );
        println!(
            "     {} · {} · {}",
            resume.id.dimmed(),
            resume.source,
            resume
                .analyzed_at
                .format(&config.ui.date_format)
                .to_string()
                .dimmed()
        );
        if !resume.skills.is_empty() {
            println!("     {}", resume.skills.dimmed());
        }
    }

    if resumes.len() > limit {
        println!();
        println!(
            "{}",
            format!("... and {} more (use --limit to see them)", resumes.len() - limit).dimmed()
        );
    }

    Ok(())
}
