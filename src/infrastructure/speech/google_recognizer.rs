use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;

use crate::application::ports::{RecognizerError, SpeechRecognizer};

const DEFAULT_BASE_URL: &str = "https://speech.googleapis.com";
const SAMPLE_RATE_HERTZ: u32 = 16_000;

/// Google Cloud Speech-to-Text synchronous recognition over REST.
pub struct GoogleSpeechRecognizer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<RecognitionResult>,
}

#[derive(Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternatives: Vec<RecognitionAlternative>,
}

#[derive(Deserialize)]
struct RecognitionAlternative {
    #[serde(default)]
    transcript: String,
}

impl GoogleSpeechRecognizer {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

#[async_trait]
impl SpeechRecognizer for GoogleSpeechRecognizer {
    async fn recognize(
        &self,
        wav_data: &[u8],
        language: &str,
    ) -> Result<String, RecognizerError> {
        let url = format!("{}/v1/speech:recognize", self.base_url);

        let body = serde_json::json!({
            "config": {
                "encoding": "LINEAR16",
                "sampleRateHertz": SAMPLE_RATE_HERTZ,
                "languageCode": language,
            },
            "audio": {
                "content": general_purpose::STANDARD.encode(wav_data),
            }
        });

        tracing::debug!(language = %language, bytes = wav_data.len(), "Sending audio to Google Speech");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| RecognizerError::ApiRequestFailed(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RecognizerError::ApiRequestFailed(format!(
                "status {status}: {body}"
            )));
        }

        let parsed: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| RecognizerError::InvalidResponse(e.to_string()))?;

        // No results at all means nothing intelligible was heard. That is a
        // valid empty transcript, not an error.
        let transcript = parsed
            .results
            .iter()
            .filter_map(|r| r.alternatives.first())
            .map(|a| a.transcript.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string();

        tracing::info!(chars = transcript.len(), "Google Speech recognition completed");

        Ok(transcript)
    }
}
