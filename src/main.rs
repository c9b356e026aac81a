use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use wardvoice::application::services::{
    CredentialCache, ImageAnalysisService, RefinementService, TicketService, TranscriptionService,
};
use wardvoice::infrastructure::audio::SymphoniaWavTranscoder;
use wardvoice::infrastructure::llm::GeminiClient;
use wardvoice::infrastructure::observability::{init_tracing, TracingConfig};
use wardvoice::infrastructure::speech::GoogleSpeechRecognizer;
use wardvoice::infrastructure::ticketing::{FittcoreGateway, HttpTokenEndpoint};
use wardvoice::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env();
    init_tracing(TracingConfig::default(), settings.server.port);

    if settings.gemini.api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY not set, model calls will fall back to mock output");
    }

    let transcoder = Arc::new(SymphoniaWavTranscoder);
    let recognizer = Arc::new(GoogleSpeechRecognizer::new(
        settings.speech.api_key.clone(),
        None,
    ));
    let model = Arc::new(GeminiClient::new(
        settings.gemini.api_key.clone(),
        settings.gemini.model.clone(),
        None,
    ));

    let token_endpoint = Arc::new(HttpTokenEndpoint::new(settings.fittcore.token_url.clone()));
    let credentials = Arc::new(CredentialCache::new(
        token_endpoint,
        settings.fittcore.client_id.clone(),
        settings.fittcore.client_secret.clone(),
    ));
    let gateway = Arc::new(FittcoreGateway::new(settings.fittcore.api_base.clone()));

    let state = AppState {
        transcription_service: Arc::new(TranscriptionService::new(
            transcoder,
            recognizer,
            Arc::clone(&model),
            settings.speech.language.clone(),
        )),
        refinement_service: Arc::new(RefinementService::new(Arc::clone(&model))),
        image_service: Arc::new(ImageAnalysisService::new(Arc::clone(&model))),
        ticket_service: Arc::new(TicketService::new(
            credentials,
            gateway,
            settings.fittcore.team_id.clone(),
        )),
    };

    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
