//! Google Gemini API client
//!
//! Minimal client for the `generateContent` endpoint, used once at
//! startup to refresh the featured artist's history text.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const GEMINI_MODEL: &str = "gemini-pro-latest";
const USER_AGENT: &str = "bandpage/0.1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Gemini client errors
#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Model returned no text")]
    EmptyResponse,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Gemini `generateContent` API client
pub struct GeminiClient {
    http_client: reqwest::Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: &str) -> Result<Self, GeminiError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GeminiError::NetworkError(e.to_string()))?;

        Ok(Self {
            http_client,
            api_key: api_key.to_string(),
        })
    }

    /// Ask the model to generate text for a single prompt.
    ///
    /// Returns the first candidate's text with its parts concatenated.
    pub async fn generate_text(&self, prompt: &str) -> Result<String, GeminiError> {
        let url = format!("{}/models/{}:generateContent", GEMINI_BASE_URL, GEMINI_MODEL);

        tracing::debug!(model = GEMINI_MODEL, "Querying Gemini API");

        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GeminiError::NetworkError(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GeminiError::ApiError(status.as_u16(), error_text));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::ParseError(e.to_string()))?;

        let text = extract_text(&payload).ok_or(GeminiError::EmptyResponse)?;

        tracing::info!(chars = text.len(), "Received generated text from Gemini");

        Ok(text)
    }
}

/// Pull the generated text out of a response: the first candidate's parts,
/// concatenated. None when the response carries no usable text.
fn extract_text(response: &GenerateContentResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let text: String = content
        .parts
        .iter()
        .map(|part| part.text.as_str())
        .collect();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
