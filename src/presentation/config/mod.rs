mod settings;

pub use settings::{FittcoreSettings, GeminiSettings, ServerSettings, Settings, SpeechSettings};
