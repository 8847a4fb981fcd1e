//! Groq client. Groq exposes an OpenAI-compatible chat-completions API.

use crate::error::{classify_status, AiError, AiResult};
use crate::interpret::interpret;
use crate::prompt::{build_analysis_prompt, SYSTEM_PROMPT};
use crate::provider::{http_client, ResumeAnalyzer};
use crate::types::{ChatRequest, ChatResponse};
use reqwest::Client;
use talentlens_config::ProviderSettings;
use talentlens_core::AnalysisResult;
use tracing::debug;

pub(crate) const PROVIDER: &str = "Groq";

/// Client for the Groq chat-completions API.
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    settings: ProviderSettings,
}

impl GroqClient {
    pub fn new(settings: ProviderSettings) -> AiResult<Self> {
        Ok(Self {
            client: http_client()?,
            settings,
        })
    }
}

impl ResumeAnalyzer for GroqClient {
    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    async fn analyze(&self, resume_text: &str, job_requirements: &str) -> AiResult<AnalysisResult> {
        if self.settings.api_key_is_placeholder() {
            return Err(AiError::MissingApiKey {
                provider: PROVIDER,
                hint: " Groq keys start with 'gsk_' and can be created at https://console.groq.com/keys.",
            });
        }

        let prompt = build_analysis_prompt(resume_text, job_requirements);
        let request = ChatRequest::analysis(&self.settings.model, SYSTEM_PROMPT, prompt);

        debug!(
            "Calling Groq API at {} with model {}",
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
