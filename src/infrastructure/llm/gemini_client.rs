use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::application::ports::{GenerativeModel, ImageAttachment, ModelError};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Gemini `generateContent` client covering all three modes the services
/// need: free text, JSON-constrained output, and vision.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, base_url: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            api_key,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model,
        }
    }

    async fn generate(&self, body: Value) -> Result<String, ModelError> {
        if self.api_key.is_empty() {
            return Err(ModelError::MissingApiKey);
        }

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| ModelError::ApiRequestFailed(format!("request: {e}")))?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(ModelError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ModelError::ApiRequestFailed(format!(
                "status {status}: {body}"
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ModelError::InvalidResponse(e.to_string()))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ModelError::InvalidResponse(
                "no text candidate in response".to_string(),
            ));
        }

        Ok(text)
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, ModelError> {
        tracing::debug!(model = %self.model, "Gemini text generation");
        self.generate(serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        }))
        .await
    }

    async fn generate_json(&self, prompt: &str) -> Result<String, ModelError> {
        tracing::debug!(model = %self.model, "Gemini structured generation");
        self.generate(serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "response_mime_type": "application/json" }
        }))
        .await
    }

    async fn describe_image(
        &self,
        prompt: &str,
        image: &ImageAttachment,
    ) -> Result<String, ModelError> {
        tracing::debug!(model = %self.model, mime_type = %image.mime_type, "Gemini vision generation");
        self.generate(serde_json::json!({
            "contents": [{
                "parts": [
                    { "text": prompt },
                    {
                        "inline_data": {
                            "mime_type": image.mime_type,
                            "data": general_purpose::STANDARD.encode(&image.data),
                        }
                    }
                ]
            }]
        }))
        .await
    }
}
