//! Error types for AI provider operations.

use thiserror::Error;

/// Errors that can occur when calling an AI provider.
#[derive(Error, Debug)]
pub enum AiError {
    /// The API key is missing or still the setup placeholder. Detected
    /// before any network call is made.
    #[error("{provider} API key is not configured. Add it to the [ai] section of the config file or set the provider's environment variable.{hint}")]
    MissingApiKey {
        provider: &'static str,
        hint: &'static str,
    },

    /// 401/403 from the provider.
    #[error("{provider} authentication failed (status {status}). Verify the API key is valid, active, and properly formatted. Details: {detail}")]
    Auth {
        provider: &'static str,
        status: u16,
        detail: String,
    },

    /// 404 from the provider.
    #[error("{provider} endpoint or model not found (404). Verify the API URL and the model name. Details: {detail}")]
    EndpointNotFound {
        provider: &'static str,
        detail: String,
    },

    /// 429 from the provider. Not retried automatically; wait and retry.
    #[error("{provider} rate limit exceeded (429). Check your usage quota and wait before retrying. Details: {detail}")]
    RateLimited {
        provider: &'static str,
        detail: String,
    },

    /// 400 from the provider.
    #[error("{provider} rejected the request (400). Verify the model name and request format. Details: {detail}")]
    BadRequest {
        provider: &'static str,
        detail: String,
    },

    /// Any other non-2xx status.
    #[error("{provider} API call failed (status {status}): {detail}")]
    Api {
        provider: &'static str,
        status: u16,
        detail: String,
    },

    /// The response parsed, but the expected choice/candidate nesting was
    /// absent.
    #[error("Unexpected response structure from {provider} API")]
    UnexpectedEnvelope { provider: &'static str },

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for AI provider operations.
pub type AiResult<T> = Result<T, AiError>;

/// Map a non-success HTTP status to the error taxonomy shared by all
/// provider clients.
pub(crate) fn classify_status(provider: &'static str, status: u16, detail: String) -> AiError {
    match status {
        401 | 403 => AiError::Auth {
            provider,
            status,
            detail,
        },
        404 => AiError::EndpointNotFound { provider, detail },
        429 => AiError::RateLimited { provider, detail },
        400 => AiError::BadRequest { provider, detail },
        _ => AiError::Api {
            provider,
            status,
            detail,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_status() {
        assert!(matches!(
            classify_status("OpenAI", 401, String::new()),
            AiError::Auth { status: 401, .. }
        ));
        assert!(matches!(
            classify_status("Gemini", 403, String::new()),
            AiError::Auth { status: 403, .. }
        ));
        assert!(matches!(
            classify_status("Gemini", 404, String::new()),
            AiError::EndpointNotFound { .. }
        ));
        assert!(matches!(
            classify_status("Groq", 429, String::new()),
            AiError::RateLimited { .. }
        ));
        assert!(matches!(
            classify_status("Groq", 400, String::new()),
            AiError::BadRequest { .. }
        ));
        assert!(matches!(
            classify_status("OpenAI", 503, String::new()),
            AiError::Api { status: 503, .. }
        ));
    }
}
