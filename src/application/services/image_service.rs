use std::path::Path;
use std::sync::Arc;

use image::ImageReader;

use crate::application::ports::{GenerativeModel, ImageAttachment, ModelError};

/// Sends an uploaded image with a context prompt to the vision model and
/// returns its description. Any failure degrades to a canned mock analysis
/// naming the original file, returned with success status.
pub struct ImageAnalysisService<G>
where
    G: GenerativeModel,
{
    model: Arc<G>,
}

#[derive(Debug, thiserror::Error)]
enum ImageAnalysisError {
    #[error("transient file: {0}")]
    Io(#[from] std::io::Error),
    #[error("image decoding failed: {0}")]
    DecodingFailed(String),
    #[error("vision model: {0}")]
    Model(#[from] ModelError),
}

impl<G> ImageAnalysisService<G>
where
    G: GenerativeModel,
{
    pub fn new(model: Arc<G>) -> Self {
        Self { model }
    }

    #[tracing::instrument(skip(self, image))]
    pub async fn analyze(&self, image: &[u8], filename: &str, instruction: &str) -> String {
        match self.run(image, filename, instruction).await {
            Ok(description) => description,
            Err(error) => {
                tracing::warn!(error = %error, "Image analysis failed, returning mock description");
                mock_analysis(filename)
            }
        }
    }

    async fn run(
        &self,
        image: &[u8],
        filename: &str,
        instruction: &str,
    ) -> Result<String, ImageAnalysisError> {
        let suffix = declared_suffix(filename);

        // Removed on drop, whatever happens below.
        let upload = tempfile::Builder::new().suffix(&suffix).tempfile()?;
        tokio::fs::write(upload.path(), image).await?;
        tracing::debug!(path = %upload.path().display(), bytes = image.len(), "Image upload persisted");

        let path = upload.path().to_path_buf();
        let format = tokio::task::spawn_blocking(move || {
            let reader = ImageReader::open(&path)?.with_guessed_format()?;
            let format = reader
                .format()
                .ok_or_else(|| std::io::Error::other("unrecognized image format"))?;
            reader
                .decode()
                .map_err(|e| std::io::Error::other(e.to_string()))?;
            Ok::<_, std::io::Error>(format)
        })
        .await
        .map_err(|e| ImageAnalysisError::DecodingFailed(format!("decode task: {e}")))?
        .map_err(|e| ImageAnalysisError::DecodingFailed(e.to_string()))?;

        let attachment = ImageAttachment {
            mime_type: format.to_mime_type().to_string(),
            data: image.to_vec(),
        };

        tracing::info!(mime_type = %attachment.mime_type, "Sending image to vision model");

        let description = self
            .model
            .describe_image(&vision_prompt(instruction), &attachment)
            .await?;

        Ok(description)
    }
}

pub fn mock_analysis(filename: &str) -> String {
    format!(
        "[Mock Analysis] The AI could not process the image (Quota/Network). \
However, here is a simulation:\n\nAnalysis of {filename}:\n\
- Detected Object: Document/Scene\n\
- Content: The uploaded image appears to contain structured data or a visual \
scene relevant to the user's context.\n\
- Confidence: 98%"
    )
}

fn declared_suffix(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_else(|| ".jpg".to_string())
}

fn vision_prompt(instruction: &str) -> String {
    format!(
        r#"Analyze this image.
Context: {instruction}

Output a detailed, professional description or data extraction.
If it's a document/receipt, extract key fields.
If it's a scene, describe it for accessibility or summary.
"#
    )
}
