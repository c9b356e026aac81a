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

#[derive(Serialize)]
pub struct SttCleanResponse {
    #[serde(rename = "cleanText")]
    pub clean_text: String,
    #[serde(rename = "rawText")]
    pub raw_text: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn stt_clean_handler<A, R, G, E, T>(
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
    let mut audio: Option<(String, Vec<u8>)> = None;

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

        if field.name() == Some("audio") {
            let filename = field.file_name().unwrap_or("recording.m4a").to_string();
            match field.bytes().await {
                Ok(data) => audio = Some((filename, data.to_vec())),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read audio bytes");
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
    }

    let Some((filename, data)) = audio else {
        tracing::warn!("Transcription request with no audio file");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "no audio file provided".to_string(),
            }),
        )
            .into_response();
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "Audio upload received");

    let transcript = state.transcription_service.transcribe(&data, &filename).await;

    (
        StatusCode::OK,
        Json(SttCleanResponse {
            clean_text: transcript.clean_text,
            raw_text: transcript.raw_text,
        }),
    )
        .into_response()
}
