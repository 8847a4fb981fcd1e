//! CLI command implementations.

pub mod check;
pub mod config;
pub mod delete;
pub mod import;
pub mod init;
pub mod profile;
pub mod rank;
pub mod settings;
pub mod show;
pub mod upload;

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};
use talentlens_config::{AppPaths, Config};
use talentlens_db::Database;

/// Get the application paths.
pub fn get_paths() -> Result<AppPaths> {
    AppPaths::new().context("Failed to determine application directories")
}

/// Get a database connection, ensuring TalentLens is initialized.
pub fn get_database() -> Result<Database> {
    let paths = get_paths()?;

    if !paths.is_initialized() {
        anyhow::bail!("TalentLens is not initialized. Run 'talentlens init' first.");
    }

    Database::open(&paths.database_file).context("Failed to open database")
}

/// Load the configuration, falling back to defaults when no file exists.
pub fn load_config() -> Result<Config> {
    let paths = get_paths()?;
    Config::load_from(&paths.config_file).context("Failed to load config")
}

/// Color a match score by band: strong, good, fair, weak.
pub fn format_score(score: f64) -> ColoredString {
    let text = format!("{:.1}", score);
    if score >= 90.0 {
        text.green().bold()
    } else if score >= 75.0 {
        text.green()
    } else if score >= 60.0 {
        text.yellow()
    } else {
        text.red()
    }
}
