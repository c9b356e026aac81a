mod analyze_image;
mod health;
mod refine;
mod send_ticket;
mod stt_clean;

pub use analyze_image::analyze_image_handler;
pub use health::health_handler;
pub use refine::refine_handler;
pub use send_ticket::send_ticket_handler;
pub use stt_clean::stt_clean_handler;

use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
