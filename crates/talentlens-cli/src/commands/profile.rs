//! Job profile commands.

use super::get_database;
use anyhow::Result;
use colored::Colorize;
use talentlens_core::JobProfile;

pub fn create(
    title: &str,
    description: &str,
    required: &str,
    preferred: &str,
    experience: &str,
) -> Result<()> {
    let db = get_database()?;

    let profile = JobProfile::new(title)
        .with_description(description)
        .with_required_skills(required)
        .with_preferred_skills(preferred)
        .with_experience_level(experience);

    db.create_profile(&profile)?;

    println!(
        "{} Created profile: {} ({})",
        "✓".green(),
        profile.title.white().bold(),
        profile.id
    );
    println!("  New uploads will be scored against this profile.");

    Ok(())
}

pub fn list() -> Result<()> {
    let db = get_database()?;
    let profiles = db.list_profiles()?;

    if profiles.is_empty() {
        println!("{}", "No job profiles yet.".yellow());
        println!(
            "Create one with: {}",
            "talentlens profile create \"Backend Engineer\"".cyan()
        );
        return Ok(());
    }

    println!("{}", "Job Profiles".cyan().bold());
    println!("{}", "─".repeat(70));

    for profile in profiles {
        let marker = if profile.active {
            "● active".green().to_string()
        } else {
            "○".dimmed().to_string()
        };
        println!("{} {}", marker, profile.title.white().bold());
        println!("  {}: {}", "ID".cyan(), profile.id);
        if !profile.experience_level.is_empty() {
            println!("  {}: {}", "Experience".cyan(), profile.experience_level);
        }
        if !profile.required_skills.is_empty() {
            println!("  {}: {}", "Required".cyan(), profile.required_skills);
        }
        println!();
    }

    Ok(())
}

pub fn activate(id: &str) -> Result<()> {
    let db = get_database()?;
    db.activate_profile(id)?;

    let profile = db.get_profile(id)?;
    println!(
        "{} Activated profile: {}",
        "✓".green(),
        profile.title.white().bold()
    );

    Ok(())
}

pub fn active() -> Result<()> {
    let db = get_database()?;

    match db.find_active_profile()? {
        Some(profile) => {
            println!("{}", profile.title.white().bold());
            println!("{}", "─".repeat(70));
            println!("  {}: {}", "ID".cyan(), profile.id);
            if !profile.description.is_empty() {
                println!("  {}: {}", "Description".cyan(), profile.description);
            }
            if !profile.required_skills.is_empty() {
                println!("  {}: {}", "Required".cyan(), profile.required_skills);
            }
            if !profile.preferred_skills.is_empty() {
                println!("  {}: {}", "Preferred".cyan(), profile.preferred_skills);
            }
            if !profile.experience_level.is_empty() {
                println!("  {}: {}", "Experience".cyan(), profile.experience_level);
            }
        }
        None => {
            println!("{}", "No active job profile.".yellow());
            println!(
                "Activate one with: {}",
                "talentlens profile activate <id>".cyan()
            );
        }
    }

    Ok(())
}

pub fn delete(id: &str) -> Result<()> {
    let db = get_database()?;
    db.delete_profile(id)?;
    println!("{} Deleted profile {}", "✓".green(), id);
    Ok(())
}
