//! Check command - verify a provider's API key is configured.

use super::load_config;
use anyhow::Result;
use colored::Colorize;
use talentlens_ai::ProviderRegistry;

pub fn run(provider: Option<&str>) -> Result<()> {
    let config = load_config()?;
    let registry = ProviderRegistry::new(config.ai);

    let kind = registry.resolve_kind(provider);
    match registry.test_connection(provider) {
        Ok(()) => {
            println!(
                "{} {} is configured and ready to use.",
                "✓".green(),
                kind.canonical_name().white().bold()
            );
        }
        Err(e) => {
            anyhow::bail!("{}", e);
        }
    }

    Ok(())
}
