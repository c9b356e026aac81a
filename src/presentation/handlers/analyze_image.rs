use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{
    AudioTranscoder, GenerativeModel, SpeechRecognizer, TicketGateway, TokenEndpoint,
};
use crate::presentation::handlers::ErrorResponse;
use crate::presentation::state::AppState;

const DEFAULT_INSTRUCTION: &str = "Describe this image";

#[derive(Serialize)]
pub struct AnalyzeImageResponse {
    pub result: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_image_handler<A, R, G, E, T>(
    State(state): State<AppState<A, R, G, E, T>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    A: AudioTranscoder + 'static,
    R: SpeechRecognizer + 'static,
    G: GenerativeModel + 'static,
    E: TokenEndpoint + 'static,
    T: TicketGateway + 'static,
{
    let mut image: Option<(String, Vec<u8>)> = None;
    let mut instruction = DEFAULT_INSTRUCTION.to_string();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {e}"),
                    }),
                )
                    .into_response();
            }
        };

        match field.name() {
            Some("image") => {
                let filename = field.file_name().unwrap_or("image.jpg").to_string();
                match field.bytes().await {
                    Ok(data) => image = Some((filename, data.to_vec())),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read image bytes");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                error: format!("Failed to read file: {e}"),
                            }),
                        )
                            .into_response();
                    }
                }
            }
            Some("instruction") => {
                if let Ok(text) = field.text().await {
                    if !text.is_empty() {
                        instruction = text;
                    }
                }
            }
            _ => {}
        }
    }

    let Some((filename, data)) = image else {
        tracing::warn!("Image analysis request with no image file");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No image file provided".to_string(),
            }),
        )
            .into_response();
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "Image upload received");

    let result = state.image_service.analyze(&data, &filename, &instruction).await;

    (StatusCode::OK, Json(AnalyzeImageResponse { result })).into_response()
}
