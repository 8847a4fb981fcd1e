//! OpenAI chat-completions client.

use crate::error::{classify_status, AiError, AiResult};
use crate::interpret::interpret;
use crate::prompt::{build_analysis_prompt, SYSTEM_PROMPT};
use crate::provider::{http_client, ResumeAnalyzer};
use crate::types::{ChatRequest, ChatResponse};
use reqwest::Client;
use talentlens_config::ProviderSettings;
use talentlens_core::AnalysisResult;
use tracing::debug;

pub(crate) const PROVIDER: &str = "OpenAI";

/// Client for the OpenAI chat-completions API.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    settings: ProviderSettings,
}

impl OpenAiClient {
    pub fn new(settings: ProviderSettings) -> AiResult<Self> {
        Ok(Self {
            client: http_client()?,
            settings,
        })
    }
}

impl ResumeAnalyzer for OpenAiClient {
    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    async fn analyze(&self, resume_text: &str, job_requirements: &str) -> AiResult<AnalysisResult> {
        if self.settings.api_key_is_placeholder() {
            return Err(AiError::MissingApiKey {
                provider: PROVIDER,
                hint: "",
            });
        }

        let prompt = build_analysis_prompt(resume_text, job_requirements);
        let request = ChatRequest::analysis(&self.settings.model, SYSTEM_PROMPT, prompt);

        debug!(
            "Calling OpenAI API at {} with model {}",
            self.settings.api_url, self.settings.model
        );

        let response = self
            .client
            .post(&self.settings.api_url)
            .bearer_auth(&self.settings.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(classify_status(PROVIDER, status.as_u16(), detail));
        }

        let envelope: ChatResponse = response.json().await?;
        let content = envelope
            .content()
            .ok_or(AiError::UnexpectedEnvelope { provider: PROVIDER })?;

        Ok(interpret(&content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_key(key: &str) -> ProviderSettings {
        ProviderSettings {
            api_key: key.to_string(),
            model: "gpt-3.5-turbo".to_string(),
            api_url: "https://api.openai.com/v1/chat/completions".to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_key_detected_before_network_call() {
        let client = OpenAiClient::new(settings_with_key("")).unwrap();
        let err = client.analyze("resume", "job").await.unwrap_err();
        assert!(matches!(err, AiError::MissingApiKey { provider, .. } if provider == "OpenAI"));
    }

    #[tokio::test]
    async fn test_placeholder_key_detected() {
        let client = OpenAiClient::new(settings_with_key("your_openai_api_key_here")).unwrap();
        let err = client.analyze("resume", "job").await.unwrap_err();
        assert!(matches!(err, AiError::MissingApiKey { .. }));
    }

    #[test]
    fn test_provider_name() {
        let client = OpenAiClient::new(settings_with_key("sk-x")).unwrap();
        assert_eq!(client.provider_name(), "OpenAI");
    }
}
