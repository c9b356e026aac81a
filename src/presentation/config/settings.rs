const DEFAULT_PORT: u16 = 5001;
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_SPEECH_LANGUAGE: &str = "th-TH";
const DEFAULT_FITTCORE_TOKEN_URL: &str =
    "https://ap-southeast-1qwjbwp4sy.auth.ap-southeast-1.amazoncognito.com/oauth2/token";
const DEFAULT_FITTCORE_API_BASE: &str = "https://sandbox-open-api.fittcoreai.com/v1/ticket";

/// Runtime configuration, read once from the environment at startup.
///
/// Missing vendor keys are not fatal here: the services degrade to their
/// mock fallbacks when the corresponding call fails, which keeps the relay
/// usable in demo setups without any credentials.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub gemini: GeminiSettings,
    pub speech: SpeechSettings,
    pub fittcore: FittcoreSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct SpeechSettings {
    pub api_key: String,
    pub language: String,
}

#[derive(Debug, Clone)]
pub struct FittcoreSettings {
    pub client_id: String,
    pub client_secret: String,
    pub team_id: String,
    pub token_url: String,
    pub api_base: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                port: env_var("SERVER_PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_PORT),
            },
            gemini: GeminiSettings {
                api_key: env_var("GEMINI_API_KEY").unwrap_or_default(),
                model: env_var("GEMINI_MODEL")
                    .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            },
            speech: SpeechSettings {
                api_key: env_var("GOOGLE_SPEECH_API_KEY").unwrap_or_default(),
                language: env_var("SPEECH_LANGUAGE")
                    .unwrap_or_else(|| DEFAULT_SPEECH_LANGUAGE.to_string()),
            },
            fittcore: FittcoreSettings {
                client_id: env_var("FITTCORE_CLIENT_ID").unwrap_or_default(),
                client_secret: env_var("FITTCORE_CLIENT_SECRET").unwrap_or_default(),
                team_id: env_var("FITTCORE_TEAM_ID").unwrap_or_default(),
                token_url: env_var("FITTCORE_TOKEN_URL")
                    .unwrap_or_else(|| DEFAULT_FITTCORE_TOKEN_URL.to_string()),
                api_base: env_var("FITTCORE_API_BASE")
                    .unwrap_or_else(|| DEFAULT_FITTCORE_API_BASE.to_string()),
            },
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
