use std::path::Path;

use async_trait::async_trait;

/// Converts any supported audio container/codec into 16 kHz mono 16-bit
/// linear PCM WAV, reading and writing transient files owned by the caller.
#[async_trait]
pub trait AudioTranscoder: Send + Sync {
    async fn to_wav(&self, input: &Path, output: &Path) -> Result<(), TranscodeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
