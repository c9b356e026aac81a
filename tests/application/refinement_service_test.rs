use std::sync::Arc;

use wardvoice::application::ports::{GenerativeModel, ImageAttachment, ModelError};
use wardvoice::application::services::{strip_fillers, RefinementError, RefinementService};

struct FailingModel;

#[async_trait::async_trait]
impl GenerativeModel for FailingModel {
    async fn generate_text(&self, _prompt: &str) -> Result<String, ModelError> {
        Err(ModelError::RateLimited)
    }

    async fn generate_json(&self, _prompt: &str) -> Result<String, ModelError> {
        Err(ModelError::RateLimited)
    }

    async fn describe_image(
        &self,
        _prompt: &str,
        _image: &ImageAttachment,
    ) -> Result<String, ModelError> {
        Err(ModelError::RateLimited)
    }
}

#[test]
fn strips_filler_tokens_and_collapses_whitespace() {
    assert_eq!(
        strip_fillers("เอ่อ วันนี้ แบบว่า สบายดีครับ"),
        "วันนี้ สบายดีครับ"
    );
}

#[test]
fn collapses_ellipses_to_single_space() {
    assert_eq!(strip_fillers("ก็... คือว่า ไปต่อ..."), "ไปต่อ");
}

#[test]
fn leaves_clean_text_untouched() {
    assert_eq!(strip_fillers("ผู้ป่วยอาการดีขึ้น"), "ผู้ป่วยอาการดีขึ้น");
}

#[tokio::test]
async fn given_empty_text_then_validation_error() {
    let service = RefinementService::new(Arc::new(FailingModel));

    let result = service.refine("", "Clean up speech").await;

    assert!(matches!(result, Err(RefinementError::EmptyText)));
}

#[tokio::test]
async fn given_model_outage_and_unknown_instruction_then_text_passes_through() {
    let service = RefinementService::new(Arc::new(FailingModel));

    let result = service.refine("original wording", "refine").await.unwrap();

    assert_eq!(result, "original wording");
}
