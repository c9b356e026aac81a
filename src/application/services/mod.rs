mod credential_cache;
mod image_service;
mod refinement_service;
mod ticket_service;
mod transcription_service;

pub use credential_cache::CredentialCache;
pub use image_service::{mock_analysis, ImageAnalysisService};
pub use refinement_service::{strip_fillers, RefinementError, RefinementService};
pub use ticket_service::{TicketError, TicketReceipt, TicketService};
pub use transcription_service::{TranscriptionService, NO_SPEECH_MESSAGE};
