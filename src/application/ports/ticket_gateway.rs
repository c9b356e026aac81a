use async_trait::async_trait;

/// External ticketing endpoint accepting a bearer-authenticated multipart
/// POST with a single text attachment.
#[async_trait]
pub trait TicketGateway: Send + Sync {
    async fn submit(
        &self,
        bearer_token: &str,
        team_id: &str,
        attachment: TicketAttachment,
    ) -> Result<serde_json::Value, TicketGatewayError>;
}

#[derive(Debug, Clone)]
pub struct TicketAttachment {
    pub filename: String,
    pub content: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum TicketGatewayError {
    #[error("ticket endpoint returned {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("transport: {0}")]
    Transport(String),
}
