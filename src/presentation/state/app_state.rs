use std::sync::Arc;

use crate::application::ports::{
    AudioTranscoder, GenerativeModel, SpeechRecognizer, TicketGateway, TokenEndpoint,
};
use crate::application::services::{
    ImageAnalysisService, RefinementService, TicketService, TranscriptionService,
};

pub struct AppState<A, R, G, E, T>
where
    A: AudioTranscoder,
    R: SpeechRecognizer,
    G: GenerativeModel,
    E: TokenEndpoint,
    T: TicketGateway,
{
    pub transcription_service: Arc<TranscriptionService<A, R, G>>,
    pub refinement_service: Arc<RefinementService<G>>,
    pub image_service: Arc<ImageAnalysisService<G>>,
    pub ticket_service: Arc<TicketService<E, T>>,
}

impl<A, R, G, E, T> Clone for AppState<A, R, G, E, T>
where
    A: AudioTranscoder,
    R: SpeechRecognizer,
    G: GenerativeModel,
    E: TokenEndpoint,
    T: TicketGateway,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            refinement_service: Arc::clone(&self.refinement_service),
            image_service: Arc::clone(&self.image_service),
            ticket_service: Arc::clone(&self.ticket_service),
        }
    }
}
