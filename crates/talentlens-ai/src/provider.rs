//! Provider selection and the analyzer seam consumed by the pipeline.

use crate::error::{AiError, AiResult};
use crate::gemini::GeminiClient;
use crate::groq::GroqClient;
use crate::openai::OpenAiClient;
use reqwest::Client;
use std::time::Duration;
use talentlens_config::AiConfig;
use talentlens_core::AnalysisResult;
use tracing::warn;

/// LLM calls are slow; every phase of the request gets a generous bound.
const TIMEOUT: Duration = Duration::from_secs(60);

/// Shared HTTP client construction for all provider clients.
pub(crate) fn http_client() -> AiResult<Client> {
    let client = Client::builder()
        .connect_timeout(TIMEOUT)
        .timeout(TIMEOUT)
        .build()?;
    Ok(client)
}

/// Anything that can turn resume text plus job requirements into a match
/// analysis. Implemented by every provider client and by the
/// [`ProviderClient`] union; test code substitutes its own implementation.
#[allow(async_fn_in_trait)]
pub trait ResumeAnalyzer {
    fn provider_name(&self) -> &'static str;

    async fn analyze(&self, resume_text: &str, job_requirements: &str) -> AiResult<AnalysisResult>;
}

/// The fixed set of supported providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Gemini,
    Groq,
}

impl ProviderKind {
    /// Parse a provider name, tolerating surrounding whitespace and any
    /// casing. Returns `None` for blank or unrecognized input.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "openai" => Some(ProviderKind::OpenAi),
            "gemini" => Some(ProviderKind::Gemini),
            "groq" => Some(ProviderKind::Groq),
            _ => None,
        }
    }

    /// Canonical display name.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OpenAI",
            ProviderKind::Gemini => "Gemini",
            ProviderKind::Groq => "Groq",
        }
    }

    /// Key used for this provider in the configuration file.
    pub fn config_key(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
            ProviderKind::Groq => "groq",
        }
    }
}

/// One concrete provider client per variant.
#[derive(Clone)]
pub enum ProviderClient {
    OpenAi(OpenAiClient),
    Gemini(GeminiClient),
    Groq(GroqClient),
}

impl ResumeAnalyzer for ProviderClient {
    fn provider_name(&self) -> &'static str {
        match self {
            ProviderClient::OpenAi(client) => client.provider_name(),
            ProviderClient::Gemini(client) => client.provider_name(),
            ProviderClient::Groq(client) => client.provider_name(),
        }
    }

    async fn analyze(&self, resume_text: &str, job_requirements: &str) -> AiResult<AnalysisResult> {
        match self {
            ProviderClient::OpenAi(client) => client.analyze(resume_text, job_requirements).await,
            ProviderClient::Gemini(client) => client.analyze(resume_text, job_requirements).await,
            ProviderClient::Groq(client) => client.analyze(resume_text, job_requirements).await,
        }
    }
}

/// Maps a requested provider name (or the configured default) to a client.
///
/// Resolution is total: blank or unknown names degrade to the default
/// provider with a logged warning instead of failing the caller.
#[derive(Clone)]
pub struct ProviderRegistry {
    ai: AiConfig,
}

impl ProviderRegistry {
    /// Build a registry over a configuration snapshot. Settings are read
    /// from the snapshot at resolution time, not cached per provider.
    pub fn new(ai: AiConfig) -> Self {
        Self { ai }
    }

    /// The provider used when no usable name is given. Falls back to
    /// OpenAI if the configured default is itself unrecognized.
    pub fn default_kind(&self) -> ProviderKind {
        ProviderKind::parse(&self.ai.default_provider).unwrap_or_else(|| {
            warn!(
                "Configured default provider '{}' is unknown, using openai",
                self.ai.default_provider
            );
            ProviderKind::OpenAi
        })
    }

    /// Normalize a requested name to a provider kind, degrading to the
    /// default on blank or unknown input.
    pub fn resolve_kind(&self, name: Option<&str>) -> ProviderKind {
        match name.map(str::trim).filter(|n| !n.is_empty()) {
            None => self.default_kind(),
            Some(requested) => ProviderKind::parse(requested).unwrap_or_else(|| {
                let fallback = self.default_kind();
                warn!(
                    "Unknown AI provider '{}', defaulting to {}",
                    requested,
                    fallback.canonical_name()
                );
                fallback
            }),
        }
    }

    /// Resolve a provider name to a ready client.
    pub fn resolve(&self, name: Option<&str>) -> AiResult<ProviderClient> {
        let kind = self.resolve_kind(name);
        let client = match kind {
            ProviderKind::OpenAi => {
                ProviderClient::OpenAi(OpenAiClient::new(self.ai.openai.clone())?)
            }
            ProviderKind::Gemini => {
                ProviderClient::Gemini(GeminiClient::new(self.ai.gemini.clone())?)
            }
            ProviderKind::Groq => ProviderClient::Groq(GroqClient::new(self.ai.groq.clone())?),
        };
        Ok(client)
    }

    /// Whether a provider name can be resolved. Name normalization never
    /// fails, so this only reports client construction problems.
    pub fn is_available(&self, name: Option<&str>) -> bool {
        self.resolve(name).is_ok()
    }

    /// Verify the named provider has a usable API key. No network call is
    /// made; a present, non-placeholder key passes.
    pub fn test_connection(&self, name: Option<&str>) -> AiResult<()> {
        let kind = self.resolve_kind(name);
        let settings = match kind {
            ProviderKind::OpenAi => &self.ai.openai,
            ProviderKind::Gemini => &self.ai.gemini,
            ProviderKind::Groq => &self.ai.groq,
        };

        if settings.api_key_is_placeholder() {
            return Err(AiError::MissingApiKey {
                provider: kind.canonical_name(),
                hint: "",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ProviderRegistry {
        ProviderRegistry::new(AiConfig::default())
    }

    #[test]
    fn test_parse_tolerates_case_and_whitespace() {
        for name in ["openai", "OpenAI", "  OPENAI  ", "OpenAi"] {
            assert_eq!(ProviderKind::parse(name), Some(ProviderKind::OpenAi));
        }
        assert_eq!(ProviderKind::parse(" gemini "), Some(ProviderKind::Gemini));
        assert_eq!(ProviderKind::parse("GROQ"), Some(ProviderKind::Groq));
        assert_eq!(ProviderKind::parse(""), None);
        assert_eq!(ProviderKind::parse("claude"), None);
    }

    #[test]
    fn test_resolve_returns_canonical_names() {
        let registry = registry();
        let cases = [
            ("openai", "OpenAI"),
            ("  Gemini ", "Gemini"),
            ("GROQ", "Groq"),
        ];
        for (input, expected) in cases {
            let client = registry.resolve(Some(input)).unwrap();
            assert_eq!(client.provider_name(), expected);
        }
    }

    #[test]
    fn test_blank_and_unknown_fall_back_to_default() {
        let registry = registry();
        let default_name = registry
            .resolve(Some(&registry.ai.default_provider.clone()))
            .unwrap()
            .provider_name();

        for input in [None, Some(""), Some("   "), Some("not-a-provider")] {
            let client = registry.resolve(input).unwrap();
            assert_eq!(client.provider_name(), default_name);
        }
    }

    #[test]
    fn test_unknown_default_falls_back_to_openai() {
        let mut config = AiConfig::default();
        config.default_provider = "mystery".to_string();
        let registry = ProviderRegistry::new(config);
        assert_eq!(registry.default_kind(), ProviderKind::OpenAi);
    }

    #[test]
    fn test_connection_checks_key_presence() {
        let mut config = AiConfig::default();
        config.groq.api_key = "gsk_real_key_0123456789".to_string();
        let registry = ProviderRegistry::new(config);

        assert!(registry.test_connection(Some("groq")).is_ok());
        let err = registry.test_connection(Some("openai")).unwrap_err();
        assert!(matches!(err, AiError::MissingApiKey { provider, .. } if provider == "OpenAI"));
    }

    #[test]
    fn test_is_available_never_errors_on_names() {
        let registry = registry();
        assert!(registry.is_available(Some("groq")));
        assert!(registry.is_available(Some("garbage")));
        assert!(registry.is_available(None));
    }
}
