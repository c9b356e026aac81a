use std::sync::Arc;
use std::sync::LazyLock;

use regex::Regex;

use crate::application::ports::GenerativeModel;

/// Filler tokens stripped by the deterministic fallback, matched literally
/// and case-sensitively. Mirrors what the model is asked to remove.
const FILLER_TOKENS: [&str; 11] = [
    "เอ่อ", "แบบว่า", "คือว่า", "ก็...", "อะครับ", "ไรงี้", "เอ้ย", "อืม", "นะฮะ", "นะครับ",
    "แล้วก็",
];

static ELLIPSIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\.\.").unwrap());
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Instruction-conditioned text transformation (translate or clean up),
/// with a deterministic fallback when the model is unreachable.
pub struct RefinementService<G>
where
    G: GenerativeModel,
{
    model: Arc<G>,
}

#[derive(Debug, thiserror::Error)]
pub enum RefinementError {
    #[error("no text provided")]
    EmptyText,
}

impl<G> RefinementService<G>
where
    G: GenerativeModel,
{
    pub fn new(model: Arc<G>) -> Self {
        Self { model }
    }

    #[tracing::instrument(skip(self, text))]
    pub async fn refine(&self, text: &str, instruction: &str) -> Result<String, RefinementError> {
        if text.is_empty() {
            return Err(RefinementError::EmptyText);
        }

        match self.model.generate_text(&refine_prompt(text, instruction)).await {
            Ok(response) => Ok(response.trim().to_string()),
            Err(error) => {
                tracing::warn!(error = %error, "Refinement model failed, using deterministic fallback");
                Ok(fallback(text, instruction))
            }
        }
    }
}

/// Model-free substitute applied when the generative call fails. Cleanup
/// degrades to literal filler stripping, translation to a busy notice,
/// anything else passes through unchanged.
fn fallback(text: &str, instruction: &str) -> String {
    if instruction.contains("Clean") {
        strip_fillers(text)
    } else if instruction.contains("Translate") {
        format!("[System Busy] {text} (Unable to translate due to high traffic)")
    } else {
        text.to_string()
    }
}

pub fn strip_fillers(text: &str) -> String {
    let mut result = text.to_string();
    for filler in FILLER_TOKENS {
        result = result.replace(filler, "");
    }
    let result = ELLIPSIS.replace_all(&result, " ");
    WHITESPACE_RUN.replace_all(&result, " ").trim().to_string()
}

fn refine_prompt(text: &str, instruction: &str) -> String {
    format!(
        r#"You are a smart editor.
Input Text: "{text}"

Instruction: {instruction}

If instruction is 'Translate this', please:
1. If text is Thai -> Translate to English (Professional).
2. If text is English -> Translate to Thai (Polite).
3. If mixed -> Translate the dominant language to the other.

If instruction is 'Clean up speech', please:
1. Remove filler words (uh, um, er, เอิ่ม, แบบว่า).
2. Fix self-corrections (e.g. "Today is Mon... oops Tuesday" -> "Today is Tuesday").
3. Make the sentence clear and concise but keep the original meaning.

Output ONLY the result text. No explanations.
"#
    )
}
