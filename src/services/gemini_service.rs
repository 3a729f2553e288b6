use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error;
use std::fmt;
use std::time::Duration;

const DEFAULT_MODEL: &str = "gemini-2.5-pro";
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TEMPERATURE: f32 = 0.4;
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 2048;
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug)]
pub enum GeminiError {
    ConfigurationError(String),
    HttpError(reqwest::Error),
    ApiError(String),
    EmptyResponse,
}

impl fmt::Display for GeminiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeminiError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            GeminiError::HttpError(err) => write!(f, "HTTP error: {}", err),
            GeminiError::ApiError(msg) => write!(f, "Gemini API error: {}", msg),
            GeminiError::EmptyResponse => write!(f, "Gemini returned no content"),
        }
    }
}

impl Error for GeminiError {}

impl From<reqwest::Error> for GeminiError {
    fn from(err: reqwest::Error) -> Self {
        GeminiError::HttpError(err)
    }
}

/// Text generation seam. The production implementation talks to Gemini;
/// tests substitute a stub so no network or API key is needed.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError>;
}

#[derive(Clone)]
pub struct GeminiService {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiService {
    /// Reads `GEMINI_API_KEY` (required) and `GEMINI_MODEL` (optional).
    /// A missing key is a startup failure, not a per-request one.
    pub fn from_env() -> Result<Self, GeminiError> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::ConfigurationError("GEMINI_API_KEY not set".to_string()))?;
        if api_key.trim().is_empty() {
            return Err(GeminiError::ConfigurationError(
                "GEMINI_API_KEY is empty".to_string(),
            ));
        }

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self::new(api_key, model)
    }

    pub fn new(api_key: String, model: String) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    fn build_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }
}

// Gemini REST API request/response structures

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[async_trait]
impl ContentGenerator for GeminiService {
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: DEFAULT_TEMPERATURE,
                max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .client
            .post(self.build_url())
            .headers(headers)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(GeminiError::ApiError(format!("HTTP {}: {}", status, text)));
        }

        let parsed: GenerateContentResponse = response.json().await?;

        if let Some(error) = parsed.error {
            return Err(GeminiError::ApiError(error.message));
        }

        let text = parsed
            .candidates
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.content.parts)
            .and_then(|p| p.into_iter().next())
            .map(|p| p.text)
            .ok_or(GeminiError::EmptyResponse)?;

        if text.trim().is_empty() {
            return Err(GeminiError::EmptyResponse);
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_targets_generate_content() {
        let service =
            GeminiService::new("test-key".to_string(), "gemini-2.5-pro".to_string()).unwrap();
        let url = service.build_url();

        assert!(url.contains("generativelanguage.googleapis.com"));
        assert!(url.contains("gemini-2.5-pro:generateContent"));
        assert!(url.contains("key=test-key"));
    }

    #[test]
    fn test_from_env_fails_without_api_key() {
        std::env::remove_var("GEMINI_API_KEY");

        match GeminiService::from_env() {
            Err(GeminiError::ConfigurationError(msg)) => assert!(msg.contains("GEMINI_API_KEY")),
            other => panic!("expected configuration error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_error_display_distinguishes_configuration() {
        let err = GeminiError::ConfigurationError("GEMINI_API_KEY not set".to_string());
        assert!(err.to_string().starts_with("Configuration error"));

        let err = GeminiError::ApiError("quota exceeded".to_string());
        assert!(err.to_string().contains("quota exceeded"));
    }
}
