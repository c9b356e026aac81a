use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::ports::{
    AudioTranscoder, GenerativeModel, SpeechRecognizer, TicketGateway, TokenEndpoint,
};
use crate::application::services::TicketError;
use crate::presentation::handlers::ErrorResponse;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct SendTicketRequest {
    #[serde(default)]
    pub text: String,
    pub team_id: Option<String>,
}

#[derive(Serialize)]
pub struct SendTicketResponse {
    pub status: String,
    pub data: Value,
}

#[derive(Serialize)]
pub struct UpstreamErrorResponse {
    pub status: String,
    pub message: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn send_ticket_handler<A, R, G, E, T>(
    State(state): State<AppState<A, R, G, E, T>>,
    Json(request): Json<SendTicketRequest>,
) -> impl IntoResponse
where
    A: AudioTranscoder + 'static,
    R: SpeechRecognizer + 'static,
    G: GenerativeModel + 'static,
    E: TokenEndpoint + 'static,
    T: TicketGateway + 'static,
{
    match state
        .ticket_service
        .submit(&request.text, request.team_id.as_deref())
        .await
    {
        Ok(receipt) => {
            tracing::info!(doc_id = %receipt.local_doc_id, "Ticket submitted");
            (
                StatusCode::OK,
                Json(SendTicketResponse {
                    status: "success".to_string(),
                    data: receipt.data,
                }),
            )
                .into_response()
        }
        Err(TicketError::EmptyText) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No text content".to_string(),
            }),
        )
            .into_response(),
        Err(TicketError::Rejected { status, body }) => {
            tracing::error!(status = status, "Ticket endpoint rejected submission");
            (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                Json(UpstreamErrorResponse {
                    status: "error".to_string(),
                    message: body,
                }),
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!(error = %error, "Ticket submission failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: error.to_string(),
                }),
            )
                .into_response()
        }
    }
}
