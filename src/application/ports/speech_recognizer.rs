use async_trait::async_trait;

/// Speech-to-text backend operating on normalized 16 kHz mono WAV audio.
///
/// An empty transcript means the recognizer heard the audio but could not
/// make out any speech. That is a normal outcome, not an error.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(&self, wav_data: &[u8], language: &str)
        -> Result<String, RecognizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecognizerError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
