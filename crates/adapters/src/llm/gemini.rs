//! Google Gemini API adapter

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use trendscope_domain::{SummarizeError, Summarizer};

use super::SummarizerConfig;
use crate::http::{MAX_ERROR_BODY, truncate};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini `generateContent` summarizer
pub struct GeminiSummarizer {
    client: Client,
    api_key: Option<SecretString>,
    base_url: String,
    config: SummarizerConfig,
}

impl GeminiSummarizer {
    pub fn new(client: Client, api_key: Option<SecretString>, config: SummarizerConfig) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_BASE_URL.to_string(), config)
    }

    pub fn with_base_url(
        client: Client,
        api_key: Option<SecretString>,
        base_url: String,
        config: SummarizerConfig,
    ) -> Self {
        Self {
            client,
            api_key,
            base_url,
            config,
        }
    }

    async fn call_api(&self, prompt: &str) -> Result<GeminiResponse, SummarizeError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| SummarizeError::MissingCredential("gemini api key".to_string()))?;

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: self.config.max_output_tokens,
                temperature: self.config.temperature,
                top_p: self.config.top_p,
                top_k: self.config.top_k,
            },
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.config.model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key.expose_secret())])
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| SummarizeError::Network(e.without_url().to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizeError::Api {
                status: status.as_u16(),
                message: truncate(&body, MAX_ERROR_BODY),
            });
        }

        response
            .json()
            .await
            .map_err(|e| SummarizeError::InvalidFormat(e.without_url().to_string()))
    }
}

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
    temperature: f64,
    top_p: f64,
    top_k: u32,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    output: Option<String>,
    #[serde(default)]
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Text of the first candidate: `output` if non-empty, else the first part
fn extract_summary(response: GeminiResponse) -> Result<String, SummarizeError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| SummarizeError::InvalidFormat("No candidates".to_string()))?;

    if let Some(output) = candidate.output.filter(|o| !o.is_empty()) {
        return Ok(output);
    }

    Ok(candidate
        .content
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .unwrap_or_default())
}

#[async_trait]
impl Summarizer for GeminiSummarizer {
    async fn summarize(&self, prompt: &str) -> Result<String, SummarizeError> {
        tracing::info!(model = %self.config.model, "Requesting summary from Gemini");

        let response = self.call_api(prompt).await?;
        let summary = extract_summary(response)?;

        tracing::info!(summary_len = summary.len(), "Received summary");

        Ok(summary)
    }
}
