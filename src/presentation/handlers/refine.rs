use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    AudioTranscoder, GenerativeModel, SpeechRecognizer, TicketGateway, TokenEndpoint,
};
use crate::application::services::RefinementError;
use crate::infrastructure::observability::redact_for_log;
use crate::presentation::handlers::ErrorResponse;
use crate::presentation::state::AppState;

fn default_instruction() -> String {
    "refine".to_string()
}

#[derive(Deserialize)]
pub struct RefineRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_instruction")]
    pub instruction: String,
}

#[derive(Serialize)]
pub struct RefineResponse {
    pub result: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn refine_handler<A, R, G, E, T>(
    State(state): State<AppState<A, R, G, E, T>>,
    Json(request): Json<RefineRequest>,
) -> impl IntoResponse
where
    A: AudioTranscoder + 'static,
    R: SpeechRecognizer + 'static,
    G: GenerativeModel + 'static,
    E: TokenEndpoint + 'static,
    T: TicketGateway + 'static,
{
    tracing::debug!(
        instruction = %request.instruction,
        text = %redact_for_log(&request.text),
        "Refining text"
    );

    match state
        .refinement_service
        .refine(&request.text, &request.instruction)
        .await
    {
        Ok(result) => (StatusCode::OK, Json(RefineResponse { result })).into_response(),
        Err(RefinementError::EmptyText) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No text provided".to_string(),
            }),
        )
            .into_response(),
    }
}
