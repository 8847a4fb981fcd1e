//! Configuration structures and loading.

use crate::error::{ConfigError, ConfigResult};
use crate::paths::AppPaths;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from the default location.
    pub fn load() -> ConfigResult<Self> {
        let paths = AppPaths::new().ok_or(ConfigError::NoConfigDir)?;
        Self::load_from(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// Environment variables `OPENAI_API_KEY`, `GEMINI_API_KEY`, and
    /// `GROQ_API_KEY` take precedence over keys in the file.
    pub fn load_from(path: &PathBuf) -> ConfigResult<Self> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> ConfigResult<()> {
        let paths = AppPaths::new().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&paths.config_file)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> ConfigResult<()> {
        let contents = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Create a default config file with comments.
    pub fn create_default_file(path: &PathBuf) -> ConfigResult<()> {
        let default_config = Self::default_config_string();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, default_config)?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            self.ai.openai.api_key = key;
        }
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            self.ai.gemini.api_key = key;
        }
        if let Ok(key) = std::env::var("GROQ_API_KEY") {
            self.ai.groq.api_key = key;
        }
    }

    /// Generate a default config file with helpful comments.
    pub fn default_config_string() -> String {
        r#"# TalentLens Configuration
# AI-powered resume screening and ranking

[general]
# Data directory for the database
# data_dir = "~/.local/share/talentlens"

[ai]
# Provider used when no --provider override is given: openai, gemini, groq
default_provider = "openai"

[ai.openai]
# API key (or set OPENAI_API_KEY)
api_key = ""
model = "gpt-3.5-turbo"
api_url = "https://api.openai.com/v1/chat/completions"

[ai.gemini]
# API key (or set GEMINI_API_KEY)
api_key = ""
model = "gemini-1.5-flash"
api_url = "https://generativelanguage.googleapis.com/v1beta/models"

[ai.groq]
# API key (or set GROQ_API_KEY); keys start with gsk_
api_key = ""
model = "llama-3.3-70b-versatile"
api_url = "https://api.groq.com/openai/v1/chat/completions"

[remote]
# Remote folder import source. Disabled until a folder is configured.
enabled = false
# folder = "~/Documents/resumes"

[ui]
# Enable colored output
color = true

# Date format (strftime)
date_format = "%Y-%m-%d %H:%M"
"#
        .to_string()
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeneralConfig {
    pub data_dir: Option<String>,
}

/// AI provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Provider used when the caller does not name one.
    pub default_provider: String,
    pub openai: ProviderSettings,
    pub gemini: ProviderSettings,
    pub groq: ProviderSettings,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            default_provider: "openai".to_string(),
            openai: ProviderSettings {
                api_key: String::new(),
                model: "gpt-3.5-turbo".to_string(),
                api_url: "https://api.openai.com/v1/chat/completions".to_string(),
            },
            gemini: ProviderSettings {
                api_key: String::new(),
                model: "gemini-1.5-flash".to_string(),
                api_url: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            },
            groq: ProviderSettings {
                api_key: String::new(),
                model: "llama-3.3-70b-versatile".to_string(),
                api_url: "https://api.groq.com/openai/v1/chat/completions".to_string(),
            },
        }
    }
}

/// Settings for a single AI provider.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProviderSettings {
    pub api_key: String,
    pub model: String,
    pub api_url: String,
}

impl ProviderSettings {
    /// A provider is enabled iff an API key is configured.
    pub fn enabled(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Whether the key is absent or a placeholder left over from setup.
    pub fn api_key_is_placeholder(&self) -> bool {
        let key = self.api_key.trim();
        key.is_empty() || (key.starts_with("your_") && key.ends_with("_here"))
    }

    /// Masked key for display. Keys of eight characters or fewer are fully
    /// masked; longer keys reveal only the first and last four characters.
    pub fn masked_key(&self) -> String {
        mask_api_key(&self.api_key)
    }
}

/// Mask an API key for settings display. Counted in characters, not
/// bytes, so keys containing multibyte characters mask cleanly.
pub fn mask_api_key(api_key: &str) -> String {
    if api_key.is_empty() {
        return String::new();
    }
    let len = api_key.chars().count();
    if len <= 8 {
        return "***".to_string();
    }
    let prefix: String = api_key.chars().take(4).collect();
    let suffix: String = api_key.chars().skip(len - 4).collect();
    format!("{}***{}", prefix, suffix)
}

/// Remote folder import settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RemoteConfig {
    pub enabled: bool,
    /// Folder the import scans when no folder id is passed.
    pub folder: Option<String>,
}

/// UI/Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub color: bool,
    pub date_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            date_format: "%Y-%m-%d %H:%M".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ai.default_provider, "openai");
        assert_eq!(config.ai.gemini.model, "gemini-1.5-flash");
        assert!(config.ai.groq.api_url.contains("api.groq.com"));
        assert!(!config.remote.enabled);
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.ai.default_provider = "groq".to_string();
        config.ai.groq.api_key = "gsk_test".to_string();

        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(deserialized.ai.default_provider, "groq");
        assert_eq!(deserialized.ai.groq.api_key, "gsk_test");
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            "[ai]\ndefault_provider = \"gemini\"\n\n[ai.gemini]\nmodel = \"gemini-pro\"\n"
        )
        .unwrap();

        let config = Config::load_from(&temp_file.path().to_path_buf()).unwrap();
        assert_eq!(config.ai.default_provider, "gemini");
        assert_eq!(config.ai.gemini.model, "gemini-pro");
    }

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key(""), "");
        assert_eq!(mask_api_key("short"), "***");
        assert_eq!(mask_api_key("12345678"), "***");
        assert_eq!(mask_api_key("sk-abcdefghijklmnop"), "sk-a***mnop");
    }

    #[test]
    fn test_mask_api_key_multibyte() {
        // Character boundaries, not byte offsets
        assert_eq!(mask_api_key("aaaкzzzzzzzz"), "aaaк***zzzz");
        assert_eq!(mask_api_key("ключключключ"), "ключ***ключ");
        assert_eq!(mask_api_key("ключключ"), "***");
    }

    #[test]
    fn test_placeholder_detection() {
        let mut settings = ProviderSettings::default();
        assert!(settings.api_key_is_placeholder());

        settings.api_key = "your_groq_api_key_here".to_string();
        assert!(settings.api_key_is_placeholder());

        settings.api_key = "gsk_real_key_0123456789".to_string();
        assert!(!settings.api_key_is_placeholder());
        assert!(settings.enabled());
    }
}
