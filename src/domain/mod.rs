mod ticket_doc_id;
mod transcript;

pub use ticket_doc_id::TicketDocId;
pub use transcript::Transcript;
