//! Show command - display resume details.

use super::{format_score, get_database, load_config};
use anyhow::Result;
use colored::Colorize;

pub fn run(id: &str) -> Result<()> {
    let db = get_database()?;
    let config = load_config()?;

    let resume = db.get_resume(id)?;

    let title = if resume.candidate_name.is_empty() {
        resume.file_name.clone()
    } else {
        resume.candidate_name.clone()
    };

    println!("📄 {}", title.white().bold());
    println!("{}", "─".repeat(70));

    println!("  {}: {}", "ID".cyan(), resume.id);
    println!("  {}: {}", "File".cyan(), resume.file_name);
    println!("  {}: {}", "Source".cyan(), resume.source);
    if let Some(ref remote_id) = resume.remote_id {
        println!("  {}: {}", "Remote ID".cyan(), remote_id);
    }
    println!(
        "  {}: {}",
        "Score".cyan(),
        format_score(resume.match_score)
    );
    if !resume.email.is_empty() {
        println!("  {}: {}", "Email".cyan(), resume.email);
    }
    if !resume.phone.is_empty() {
        println!("  {}: {}", "Phone".cyan(), resume.phone);
    }
    println!(
        "  {}: {}",
        "Analyzed".cyan(),
        resume.analyzed_at.format(&config.ui.date_format)
    );

    if !resume.skills.is_empty() {
        println!();
        println!("{}", "Skills".white().bold());
        println!("{}", "─".repeat(70));
        println!("{}", resume.skills);
    }

    if !resume.experience.is_empty() {
        println!();
        println!("{}", "Experience".white().bold());
        println!("{}", "─".repeat(70));
        println!("{}", resume.experience);
    }

    if !resume.match_analysis.is_empty() {
        println!();
        println!("{}", "Analysis".white().bold());
        println!("{}", "─".repeat(70));
        println!("{}", resume.match_analysis);
    }

    if !resume.extracted_text.is_empty() {
        println!();
        println!("{}", "Extracted Text Preview".white().bold());
        println!("{}", "─".repeat(70));
        let preview: String = resume.extracted_text.chars().take(400).collect();
        println!("{}", preview.dimmed());
        if resume.extracted_text.chars().count() > 400 {
            println!("{}", "...".dimmed());
        }
    }

    Ok(())
}
