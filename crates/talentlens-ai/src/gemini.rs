//! Gemini generateContent client.
//!
//! Unlike the chat-completion providers, Gemini takes the API key as a URL
//! query parameter and nests the answer under candidates/content/parts.

use crate::error::{classify_status, AiError, AiResult};
use crate::interpret::interpret;
use crate::prompt::build_analysis_prompt;
use crate::provider::{http_client, ResumeAnalyzer};
use crate::types::{GenerateContentRequest, GenerateContentResponse};
use reqwest::Client;
use talentlens_config::ProviderSettings;
use talentlens_core::AnalysisResult;
use tracing::debug;

pub(crate) const PROVIDER: &str = "Gemini";

/// Client for the Gemini generateContent API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    settings: ProviderSettings,
}

impl GeminiClient {
    pub fn new(settings: ProviderSettings) -> AiResult<Self> {
        Ok(Self {
            client: http_client()?,
            settings,
        })
    }

    /// Endpoint for the configured model, without the key. The key is
    /// attached separately so it never appears in logs.
    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.settings.api_url.trim_end_matches('/'),
            self.settings.model
        )
    }
}

impl ResumeAnalyzer for GeminiClient {
    fn provider_name(&self) -> &'static str {
        PROVIDER
    }

    async fn analyze(&self, resume_text: &str, job_requirements: &str) -> AiResult<AnalysisResult> {
        if self.settings.api_key_is_placeholder() {
            return Err(AiError::MissingApiKey {
                provider: PROVIDER,
                hint: " Ensure the Generative Language API is enabled for your Google Cloud project.",
            });
        }

        let prompt = build_analysis_prompt(resume_text, job_requirements);
        let request = GenerateContentRequest::analysis(prompt);
        let endpoint = self.endpoint();

        debug!(
            "Calling Gemini API at {} with model {}",
            endpoint, self.settings.model
        );

        let response = self
            .client
            .post(&endpoint)
            .query(&[("key", self.settings.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(classify_status(PROVIDER, status.as_u16(), detail));
        }

        let envelope: GenerateContentResponse = response.json().await?;
        let content = envelope
            .content()
            .ok_or(AiError::UnexpectedEnvelope { provider: PROVIDER })?;

        Ok(interpret(&content))
    }
}
