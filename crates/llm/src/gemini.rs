//! Google Gemini `generateContent` adapter.

use std::time::Duration;

use async_trait::async_trait;
use pipeline::{GenerationError, TextGenerator};
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::ProviderError;

/// Default model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";
/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Connection and sampling settings for [`GeminiProvider`].
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .finish()
    }
}

impl GeminiConfig {
    /// Settings for `api_key` with the default model and endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

/// [`TextGenerator`] backed by the Gemini REST API.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: Option<u32>,
    #[serde(default)]
    candidates_token_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

impl GeminiProvider {
    /// Creates a provider for `config`.
    ///
    /// # Errors
    ///
    /// Fails if the API key is blank or the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderError::MissingApiKey { provider: "gemini" });
        }

        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(ProviderError::HttpClient)?;

        Ok(Self { config, client })
    }

    /// The settings this provider was built with.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn request_body<'a>(&self, prompt: &'a str) -> GenerateRequest<'a> {
        let generation_config = (self.config.temperature.is_some()
            || self.config.max_output_tokens.is_some())
        .then(|| GenerationConfig {
            temperature: self.config.temperature,
            max_output_tokens: self.config.max_output_tokens,
        });

        GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
            generation_config,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| GenerationError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        let retry_after = retry_after(response.headers());
        let body = response.text().await.map_err(|e| GenerationError::Transport {
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(map_status(status.as_u16(), &body, retry_after));
        }

        extract_text(&body, &self.config.model)
    }
}

/// Maps a non-success HTTP status onto a [`GenerationError`].
pub fn map_status(status: u16, body: &str, retry_after: Option<Duration>) -> GenerationError {
    let message = error_message(body);
    match status {
        401 | 403 => GenerationError::Authentication { message },
        429 => GenerationError::RateLimited {
            message,
            retry_after,
        },
        _ => GenerationError::Provider { status, message },
    }
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ => body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
    }
}

fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

fn extract_text(body: &str, model: &str) -> Result<String, GenerationError> {
    let parsed: GenerateResponse =
        serde_json::from_str(body).map_err(|e| GenerationError::MalformedResponse {
            message: format!("undecodable response body: {e}"),
        })?;

    if let Some(usage) = &parsed.usage_metadata {
        tracing::debug!(
            model,
            prompt_tokens = usage.prompt_token_count,
            response_tokens = usage.candidates_token_count,
            "Gemini token usage"
        );
    }

    let Some(candidate) = parsed.candidates.into_iter().next() else {
        let reason = parsed
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .unwrap_or_else(|| "no candidates returned".to_string());
        return Err(GenerationError::MalformedResponse {
            message: format!("no candidate text: {reason}"),
        });
    };

    let texts: Vec<String> = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    if texts.is_empty() {
        let reason = candidate
            .finish_reason
            .unwrap_or_else(|| "no text parts".to_string());
        return Err(GenerationError::MalformedResponse {
            message: format!("candidate carried no text: {reason}"),
        });
    }

    Ok(texts.concat())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_api_key_is_rejected() {
        let err = GeminiProvider::new(GeminiConfig::new("  ")).unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey { .. }));
    }

    #[test]
    fn endpoint_joins_base_and_model() {
        let mut config = GeminiConfig::new("k");
        config.base_url = "http://localhost:9/v1beta/".into();
        config.model = "gemini-test".into();
        let provider = GeminiProvider::new(config).unwrap();
        assert_eq!(
            provider.endpoint(),
            "http://localhost:9/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn request_body_omits_empty_generation_config() {
        let provider = GeminiProvider::new(GeminiConfig::new("k")).unwrap();
        let json = serde_json::to_value(provider.request_body("hello")).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert!(json.get("generationConfig").is_none());

        let mut config = GeminiConfig::new("k");
        config.max_output_tokens = Some(2048);
        let provider = GeminiProvider::new(config).unwrap();
        let json = serde_json::to_value(provider.request_body("hello")).unwrap();
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 2048);
    }

    #[test]
    fn status_mapping() {
        assert!(matches!(
            map_status(401, "", None),
            GenerationError::Authentication { .. }
        ));
        assert!(matches!(
            map_status(403, "", None),
            GenerationError::Authentication { .. }
        ));
        assert_eq!(
            map_status(429, r#"{"error":{"code":429,"message":"quota"}}"#, Some(Duration::from_secs(7))),
            GenerationError::RateLimited {
                message: "quota".into(),
                retry_after: Some(Duration::from_secs(7)),
            }
        );
        assert!(matches!(
            map_status(503, "down", None),
            GenerationError::Provider { status: 503, .. }
        ));
    }

    #[test]
    fn text_parts_are_concatenated() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Hello, "},{"text":"world"}]}}]}"#;
        assert_eq!(extract_text(body, "m").unwrap(), "Hello, world");
    }

    #[test]
    fn blocked_prompt_is_malformed() {
        let body = r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#;
        let err = extract_text(body, "m").unwrap_err();
        match err {
            GenerationError::MalformedResponse { message } => assert!(message.contains("SAFETY")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_json_body_is_malformed() {
        assert!(matches!(
            extract_text("<html>", "m"),
            Err(GenerationError::MalformedResponse { .. })
        ));
    }
}
