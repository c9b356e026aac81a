mod audio_transcoder;
mod generative_model;
mod speech_recognizer;
mod ticket_gateway;
mod token_endpoint;

pub use audio_transcoder::{AudioTranscoder, TranscodeError};
pub use generative_model::{GenerativeModel, ImageAttachment, ModelError};
pub use speech_recognizer::{RecognizerError, SpeechRecognizer};
pub use ticket_gateway::{TicketAttachment, TicketGateway, TicketGatewayError};
pub use token_endpoint::{CredentialError, IssuedToken, TokenEndpoint};
