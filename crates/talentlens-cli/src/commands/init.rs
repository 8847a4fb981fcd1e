//! Initialize TalentLens.

use super::get_paths;
use anyhow::{Context, Result};
use colored::Colorize;
use talentlens_config::Config;
use talentlens_db::Database;

pub fn run() -> Result<()> {
    let paths = get_paths()?;

    if paths.is_initialized() {
        println!("{} TalentLens is already initialized.", "Note:".yellow().bold());
        println!("  Config: {}", paths.config_file.display());
        println!("  Database: {}", paths.database_file.display());
        return Ok(());
    }

    println!("{}", "Initializing TalentLens...".cyan().bold());

    paths.ensure_dirs().context("Failed to create directories")?;
    println!("  {} Created directories", "✓".green());

    Config::create_default_file(&paths.config_file).context("Failed to create config file")?;
    println!(
        "  {} Created config: {}",
        "✓".green(),
        paths.config_file.display()
    );

    let _db = Database::open(&paths.database_file).context("Failed to initialize database")?;
    println!(
        "  {} Created database: {}",
        "✓".green(),
        paths.database_file.display()
    );

    println!();
    println!("{}", "TalentLens initialized successfully!".green().bold());
    println!();
    println!("Next steps:");
    println!(
        "  1. Add an API key: {}",
        "talentlens config set ai.openai.api_key sk-...".cyan()
    );
    println!(
        "  2. Create a job profile: {}",
        "talentlens profile create \"Backend Engineer\" -r \"Rust, SQL\"".cyan()
    );
    println!(
        "  3. Upload resumes: {}",
        "talentlens upload resume.pdf".cyan()
    );

    Ok(())
}
