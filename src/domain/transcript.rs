/// Result of one pass through the transcription pipeline.
///
/// `raw_text` holds whatever the speech recognizer produced, unmodified.
/// `clean_text` is the model-formatted version; when the cleanup stage
/// fails it falls back to `raw_text` so a usable transcript is never lost.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub raw_text: String,
    pub clean_text: String,
}

impl Transcript {
    pub fn new(raw_text: String, clean_text: String) -> Self {
        Self {
            raw_text,
            clean_text,
        }
    }

    /// Both fields carry the same unpolished recognizer output.
    pub fn unpolished(raw_text: String) -> Self {
        Self {
            clean_text: raw_text.clone(),
            raw_text,
        }
    }
}
