use async_trait::async_trait;

/// Generative model invoked in three modes: free text, structured JSON
/// output, and vision (prompt plus an inline image).
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String, ModelError>;

    /// Structured-output mode. The returned string is the model's response
    /// body, expected (but not guaranteed) to be a single JSON object.
    async fn generate_json(&self, prompt: &str) -> Result<String, ModelError>;

    async fn describe_image(
        &self,
        prompt: &str,
        image: &ImageAttachment,
    ) -> Result<String, ModelError>;
}

#[derive(Debug, Clone)]
pub struct ImageAttachment {
    pub mime_type: String,
    pub data: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model api key not configured")]
    MissingApiKey,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
