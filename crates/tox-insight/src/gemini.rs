//! Gemini `generateContent` REST client.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tox_config::AiConfig;

use crate::error::InsightError;
use crate::http::check_response;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
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
    text: Option<String>,
}

/// Text of the first candidate, or `None` when the model returned none.
///
/// # Errors
///
/// Returns [`InsightError::Parse`] if `body` is not a `generateContent`
/// response.
pub fn extract_text(body: &str) -> Result<Option<String>, InsightError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| InsightError::Parse(e.to_string()))?;
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();
    let text = text.trim();
    Ok((!text.is_empty()).then(|| text.to_string()))
}

/// Client for one Gemini model.
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client from configuration.
    ///
    /// Returns `Ok(None)` when no API key is configured.
    ///
    /// # Errors
    ///
    /// Returns [`InsightError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &AiConfig) -> Result<Option<Self>, InsightError> {
        if !config.is_configured() {
            return Ok(None);
        }
        let http = reqwest::Client::builder()
            .user_agent("toxscreen/0.1")
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Some(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.trim().to_string(),
        }))
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    /// Send one prompt and return the generated text, if any.
    ///
    /// # Errors
    ///
    /// Returns [`InsightError`] if the request fails, the API returns a
    /// non-success status, or the body cannot be parsed.
    pub async fn generate(&self, prompt: &str) -> Result<Option<String>, InsightError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };
        tracing::debug!(model = %self.model, "requesting summary");
        let resp = check_response(
            self.http
                .post(self.url())
                .header("x-goog-api-key", &self.api_key)
                .json(&request)
                .send()
                .await?,
        )
        .await?;
        let body = resp.text().await?;
        extract_text(&body)
    }
}
