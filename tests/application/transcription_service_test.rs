use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use wardvoice::application::ports::{
    AudioTranscoder, GenerativeModel, ImageAttachment, ModelError, RecognizerError,
    SpeechRecognizer, TranscodeError,
};
use wardvoice::application::services::TranscriptionService;

/// Records the transient paths it is handed so tests can verify cleanup.
struct RecordingTranscoder {
    seen_paths: Arc<Mutex<Vec<PathBuf>>>,
}

impl RecordingTranscoder {
    fn new() -> Self {
        Self {
            seen_paths: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait::async_trait]
impl AudioTranscoder for RecordingTranscoder {
    async fn to_wav(&self, input: &Path, output: &Path) -> Result<(), TranscodeError> {
        self.seen_paths
            .lock()
            .unwrap()
            .extend([input.to_path_buf(), output.to_path_buf()]);
        tokio::fs::copy(input, output).await?;
        Ok(())
    }
}

struct FixedRecognizer(&'static str);

#[async_trait::async_trait]
impl SpeechRecognizer for FixedRecognizer {
    async fn recognize(
        &self,
        _wav_data: &[u8],
        _language: &str,
    ) -> Result<String, RecognizerError> {
        Ok(self.0.to_string())
    }
}

struct MockModel {
    response: Option<&'static str>,
}

#[async_trait::async_trait]
impl GenerativeModel for MockModel {
    async fn generate_text(&self, _prompt: &str) -> Result<String, ModelError> {
        self.respond()
    }

    async fn generate_json(&self, _prompt: &str) -> Result<String, ModelError> {
        self.respond()
    }

    async fn describe_image(
        &self,
        _prompt: &str,
        _image: &ImageAttachment,
    ) -> Result<String, ModelError> {
        self.respond()
    }
}

impl MockModel {
    fn respond(&self) -> Result<String, ModelError> {
        self.response
            .map(str::to_string)
            .ok_or(ModelError::RateLimited)
    }
}

fn service(
    transcoder: RecordingTranscoder,
    recognizer: FixedRecognizer,
    model: MockModel,
) -> TranscriptionService<RecordingTranscoder, FixedRecognizer, MockModel> {
    TranscriptionService::new(
        Arc::new(transcoder),
        Arc::new(recognizer),
        Arc::new(model),
        "th-TH".to_string(),
    )
}

#[tokio::test]
async fn transient_files_removed_after_successful_run() {
    let transcoder = RecordingTranscoder::new();
    let seen_paths = Arc::clone(&transcoder.seen_paths);
    let service = service(
        transcoder,
        FixedRecognizer("สวัสดี"),
        MockModel {
            response: Some(r#"{"rawText": "สวัสดี", "cleanText": "Greeting."}"#),
        },
    );

    let transcript = service.transcribe(b"fake-audio", "clip.m4a").await;

    assert_eq!(transcript.clean_text, "Greeting.");
    let paths = seen_paths.lock().unwrap();
    assert_eq!(paths.len(), 2);
    for path in paths.iter() {
        assert!(!path.exists(), "transient file left behind: {path:?}");
    }
}

#[tokio::test]
async fn transient_files_removed_after_cleanup_failure() {
    let transcoder = RecordingTranscoder::new();
    let seen_paths = Arc::clone(&transcoder.seen_paths);
    let service = service(
        transcoder,
        FixedRecognizer("ปวดหัว"),
        MockModel { response: None },
    );

    let transcript = service.transcribe(b"fake-audio", "clip.m4a").await;

    assert_eq!(transcript.clean_text, "ปวดหัว");
    assert_eq!(transcript.raw_text, "ปวดหัว");
    for path in seen_paths.lock().unwrap().iter() {
        assert!(!path.exists(), "transient file left behind: {path:?}");
    }
}

#[tokio::test]
async fn upload_file_keeps_declared_extension() {
    let transcoder = RecordingTranscoder::new();
    let seen_paths = Arc::clone(&transcoder.seen_paths);
    let service = service(
        transcoder,
        FixedRecognizer(""),
        MockModel { response: None },
    );

    service.transcribe(b"fake-audio", "voice.webm").await;

    let paths = seen_paths.lock().unwrap();
    assert_eq!(paths[0].extension().unwrap(), "webm");
    assert_eq!(paths[1].extension().unwrap(), "wav");
}

#[tokio::test]
async fn missing_extension_defaults_to_m4a() {
    let transcoder = RecordingTranscoder::new();
    let seen_paths = Arc::clone(&transcoder.seen_paths);
    let service = service(
        transcoder,
        FixedRecognizer(""),
        MockModel { response: None },
    );

    service.transcribe(b"fake-audio", "voicenote").await;

    assert_eq!(seen_paths.lock().unwrap()[0].extension().unwrap(), "m4a");
}

#[tokio::test]
async fn unstructured_model_reply_is_used_verbatim() {
    let service = service(
        RecordingTranscoder::new(),
        FixedRecognizer("ปวดหัว"),
        MockModel {
            response: Some("Patient reports a headache."),
        },
    );

    let transcript = service.transcribe(b"fake-audio", "clip.m4a").await;

    assert_eq!(transcript.raw_text, "ปวดหัว");
    assert_eq!(transcript.clean_text, "Patient reports a headache.");
}
