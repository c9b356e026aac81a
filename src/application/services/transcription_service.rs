use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::application::ports::{
    AudioTranscoder, GenerativeModel, ModelError, SpeechRecognizer, TranscodeError,
};
use crate::domain::Transcript;

pub const NO_SPEECH_MESSAGE: &str = "No speech detected.";

/// Synthetic clinical note returned when no usable transcript exists at all.
/// Deliberately recognizable as demo content.
const MOCK_CLEAN_NOTE: &str = "Patient presented with severe migraine. \
อาการปวดศีรษะเป็นมา 2 weeks. Pain score 8/10 at temporal area. \
No nausea or vomiting. BP 130/85. Diagnosis: Chronic tension-type headache. \
Plan: Prescribe Paracetamol and follow up in 1 week.";

const MOCK_RAW_NOTE: &str = "[Mock from model error] คนไข้มีอาการ severe migraine ครับ \
ปวดมาสองอาทิตย์แล้ว ปวดแถวๆ ขมับ ให้คะแนน 8 เต็ม 10 ความดัน 130 85 \
วินิจฉัยว่าเป็น tension headache จ่ายพาราเซตามอล แล้วก็นัด follow up อาทิตย์หน้าครับ";

/// Audio upload to cleaned transcript, with layered fallbacks.
///
/// The pipeline normalizes the upload to WAV, obtains a raw transcript
/// from the speech recognizer and asks the generative model to format it.
/// Recognizer trouble degrades to an empty transcript; cleanup trouble
/// degrades to the unpolished recognizer output; anything earlier degrades
/// to a fixed mock note. `transcribe` therefore never fails.
pub struct TranscriptionService<A, R, G>
where
    A: AudioTranscoder,
    R: SpeechRecognizer,
    G: GenerativeModel,
{
    transcoder: Arc<A>,
    recognizer: Arc<R>,
    model: Arc<G>,
    language: String,
}

#[derive(Debug, thiserror::Error)]
enum PipelineError {
    #[error("transient file: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Transcode(#[from] TranscodeError),
    #[error("cleanup model: {source}")]
    Cleanup {
        raw_text: String,
        #[source]
        source: ModelError,
    },
}

impl PipelineError {
    /// Raw transcript recovered before the failing stage, if any.
    fn salvaged_raw(&self) -> Option<&str> {
        match self {
            PipelineError::Cleanup { raw_text, .. } if !raw_text.is_empty() => Some(raw_text),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct CleanupResponse {
    #[serde(rename = "cleanText")]
    clean_text: Option<String>,
}

impl<A, R, G> TranscriptionService<A, R, G>
where
    A: AudioTranscoder,
    R: SpeechRecognizer,
    G: GenerativeModel,
{
    pub fn new(transcoder: Arc<A>, recognizer: Arc<R>, model: Arc<G>, language: String) -> Self {
        Self {
            transcoder,
            recognizer,
            model,
            language,
        }
    }

    #[tracing::instrument(skip(self, audio))]
    pub async fn transcribe(&self, audio: &[u8], filename: &str) -> Transcript {
        match self.run_pipeline(audio, filename).await {
            Ok(transcript) => transcript,
            Err(error) => {
                if let Some(raw) = error.salvaged_raw() {
                    tracing::warn!(
                        error = %error,
                        "Cleanup stage failed, returning unpolished recognizer transcript"
                    );
                    Transcript::unpolished(raw.to_string())
                } else {
                    tracing::warn!(error = %error, "Pipeline failed before transcription, returning mock note");
                    Transcript::new(MOCK_RAW_NOTE.to_string(), MOCK_CLEAN_NOTE.to_string())
                }
            }
        }
    }

    async fn run_pipeline(&self, audio: &[u8], filename: &str) -> Result<Transcript, PipelineError> {
        let suffix = declared_suffix(filename);

        // Both transient files are removed on drop, on every exit path.
        let upload = tempfile::Builder::new().suffix(&suffix).tempfile()?;
        tokio::fs::write(upload.path(), audio).await?;
        tracing::debug!(path = %upload.path().display(), bytes = audio.len(), "Audio upload persisted");

        let wav = tempfile::Builder::new().suffix(".wav").tempfile()?;
        self.transcoder.to_wav(upload.path(), wav.path()).await?;

        let wav_data = tokio::fs::read(wav.path()).await?;

        let raw_text = match self.recognizer.recognize(&wav_data, &self.language).await {
            Ok(text) => text,
            Err(error) => {
                // Recognizer trouble is treated the same as unintelligible
                // audio: empty transcript, keep going.
                tracing::warn!(error = %error, "Speech recognizer unavailable");
                String::new()
            }
        };

        if raw_text.is_empty() {
            tracing::info!("Recognizer produced no speech");
            return Ok(Transcript::new(String::new(), NO_SPEECH_MESSAGE.to_string()));
        }

        tracing::info!(chars = raw_text.len(), "Raw transcript obtained, requesting cleanup");

        let response = self
            .model
            .generate_json(&cleanup_prompt(&raw_text))
            .await
            .map_err(|source| PipelineError::Cleanup {
                raw_text: raw_text.clone(),
                source,
            })?;

        let clean_text = match serde_json::from_str::<CleanupResponse>(&response) {
            Ok(parsed) => parsed.clean_text.unwrap_or_default(),
            // Model ignored the JSON instruction; its text is still usable.
            Err(_) => response,
        };

        Ok(Transcript::new(raw_text, clean_text))
    }
}

fn declared_suffix(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_else(|| ".m4a".to_string())
}

fn cleanup_prompt(raw_text: &str) -> String {
    format!(
        r#"You are a medical transcriber.
Task: Clean and format this text into a professional medical note.
Input Text: "{raw_text}"

Requirements:
- Fix grammar/spelling.
- Tone: Professional, Medical.
- Language: Maintain Thai/English code switching.

Output strictly ONE VALID JSON object:
{{
  "rawText": "{raw_text}",
  "cleanText": "..."
}}
"#
    )
}
