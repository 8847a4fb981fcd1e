//! Configuration commands.

use super::get_paths;
use anyhow::{Context, Result};
use colored::Colorize;
use talentlens_config::Config;

pub fn show() -> Result<()> {
    let paths = get_paths()?;

    if !paths.config_file.exists() {
        anyhow::bail!("Config file not found. Run 'talentlens init' first.");
    }

    let contents =
        std::fs::read_to_string(&paths.config_file).context("Failed to read config file")?;

    println!("{}", "Current Configuration".cyan().bold());
    println!("{}", "─".repeat(50));
    println!("{}", contents);

    Ok(())
}

pub fn path() -> Result<()> {
    let paths = get_paths()?;
    println!("Config: {}", paths.config_file.display());
    println!("Database: {}", paths.database_file.display());
    Ok(())
}

pub fn set(key: &str, value: &str) -> Result<()> {
    let paths = get_paths()?;

    let mut config = Config::load_from(&paths.config_file).context("Failed to load config")?;

    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["ai", "default_provider"] => config.ai.default_provider = value.to_string(),
        ["ai", "openai", "api_key"] => config.ai.openai.api_key = value.to_string(),
        ["ai", "openai", "model"] => config.ai.openai.model = value.to_string(),
        ["ai", "openai", "api_url"] => config.ai.openai.api_url = value.to_string(),
        ["ai", "gemini", "api_key"] => config.ai.gemini.api_key = value.to_string(),
        ["ai", "gemini", "model"] => config.ai.gemini.model = value.to_string(),
        ["ai", "gemini", "api_url"] => config.ai.gemini.api_url = value.to_string(),
        ["ai", "groq", "api_key"] => config.ai.groq.api_key = value.to_string(),
        ["ai", "groq", "model"] => config.ai.groq.model = value.to_string(),
        ["ai", "groq", "api_url"] => config.ai.groq.api_url = value.to_string(),
        ["remote", "enabled"] => {
            config.remote.enabled = value.parse().context("Invalid boolean value")?;
        }
        ["remote", "folder"] => config.remote.folder = Some(value.to_string()),
        ["ui", "color"] => {
            config.ui.color = value.parse().context("Invalid boolean value")?;
        }
        ["ui", "date_format"] => config.ui.date_format = value.to_string(),
        _ => {
            anyhow::bail!("Unknown config key: {}", key);
        }
    }

    config
        .save_to(&paths.config_file)
        .context("Failed to save config")?;

    // Keys never echo back in full
    let shown = if key.ends_with("api_key") {
        talentlens_config::mask_api_key(value)
    } else {
        value.to_string()
    };
    println!("{} Set {} = {}", "✓".green(), key.cyan(), shown);

    Ok(())
}
