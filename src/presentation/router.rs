use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{
    AudioTranscoder, GenerativeModel, SpeechRecognizer, TicketGateway, TokenEndpoint,
};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analyze_image_handler, health_handler, refine_handler, send_ticket_handler, stt_clean_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<A, R, G, E, T>(state: AppState<A, R, G, E, T>) -> Router
where
    A: AudioTranscoder + 'static,
    R: SpeechRecognizer + 'static,
    G: GenerativeModel + 'static,
    E: TokenEndpoint + 'static,
    T: TicketGateway + 'static,
{
    // Fully open CORS: the caller is a mobile app, not a browser origin we
    // control.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/", get(health_handler))
        .route("/stt-clean", post(stt_clean_handler::<A, R, G, E, T>))
        .route("/refine", post(refine_handler::<A, R, G, E, T>))
        .route(
            "/analyze-image",
            post(analyze_image_handler::<A, R, G, E, T>),
        )
        .route("/send-fittcore", post(send_ticket_handler::<A, R, G, E, T>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
