//! Settings command - provider overview with masked keys.

use super::load_config;
use anyhow::Result;
use colored::Colorize;
use talentlens_config::ProviderSettings;

pub fn run() -> Result<()> {
    let config = load_config()?;

    println!("{}", "AI Provider Settings".cyan().bold());
    println!("{}", "─".repeat(60));
    println!(
        "  {}: {}",
        "Default provider".cyan(),
        config.ai.default_provider
    );
    println!();

    print_provider("OpenAI", &config.ai.openai);
    print_provider("Gemini", &config.ai.gemini);
    print_provider("Groq", &config.ai.groq);

    println!("{}", "Remote Import".cyan().bold());
    println!("{}", "─".repeat(60));
    let status = if config.remote.enabled {
        "enabled".green()
    } else {
        "disabled".yellow()
    };
    println!("  {}: {}", "Status".cyan(), status);
    if let Some(ref folder) = config.remote.folder {
        println!("  {}: {}", "Folder".cyan(), folder);
    }

    Ok(())
}

fn print_provider(name: &str, settings: &ProviderSettings) {
    let status = if settings.enabled() {
        "configured".green()
    } else {
        "no API key".yellow()
    };

    println!("{} ({})", name.white().bold(), status);
    println!("  {}: {}", "Model".cyan(), settings.model);
    println!("  {}: {}", "Endpoint".cyan(), settings.api_url);
    if settings.enabled() {
        println!("  {}: {}", "API key".cyan(), settings.masked_key());
    }
    println!();
}
