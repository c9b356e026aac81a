use std::sync::Arc;

use serde_json::Value;

use crate::application::ports::{
    CredentialError, TicketAttachment, TicketGateway, TicketGatewayError, TokenEndpoint,
};
use crate::application::services::CredentialCache;
use crate::domain::TicketDocId;

const ATTACHMENT_FILENAME: &str = "transcription.txt";

/// Submits transcribed text to the external ticketing API as a text-file
/// attachment tagged with a freshly generated document number.
pub struct TicketService<E, T>
where
    E: TokenEndpoint,
    T: TicketGateway,
{
    credentials: Arc<CredentialCache<E>>,
    gateway: Arc<T>,
    default_team_id: String,
}

#[derive(Debug, Clone)]
pub struct TicketReceipt {
    pub local_doc_id: TicketDocId,
    /// Upstream response body augmented with `local_doc_id`.
    pub data: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum TicketError {
    #[error("no text content")]
    EmptyText,
    #[error(transparent)]
    Credential(#[from] CredentialError),
    #[error("ticket endpoint returned {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("ticket transport: {0}")]
    Transport(String),
}

impl<E, T> TicketService<E, T>
where
    E: TokenEndpoint,
    T: TicketGateway,
{
    pub fn new(
        credentials: Arc<CredentialCache<E>>,
        gateway: Arc<T>,
        default_team_id: String,
    ) -> Self {
        Self {
            credentials,
            gateway,
            default_team_id,
        }
    }

    #[tracing::instrument(skip(self, text))]
    pub async fn submit(
        &self,
        text: &str,
        team_id: Option<&str>,
    ) -> Result<TicketReceipt, TicketError> {
        if text.is_empty() {
            return Err(TicketError::EmptyText);
        }

        let token = self.credentials.get_token().await?;

        let doc_id = TicketDocId::generate();
        let body = format!("เลขที่เอกสาร: {doc_id}\n\n{text}");
        let attachment = TicketAttachment {
            filename: ATTACHMENT_FILENAME.to_string(),
            content: body.into_bytes(),
        };

        let team = team_id.unwrap_or(&self.default_team_id);
        tracing::info!(team_id = %team, doc_id = %doc_id, "Submitting ticket");

        let upstream = self
            .gateway
            .submit(&token, team, attachment)
            .await
            .map_err(|error| match error {
                TicketGatewayError::Rejected { status, body } => {
                    TicketError::Rejected { status, body }
                }
                TicketGatewayError::Transport(detail) => TicketError::Transport(detail),
            })?;

        // Echo the locally generated document number back so the client can
        // display it alongside the upstream record.
        let mut data = match upstream {
            Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        data.insert("local_doc_id".to_string(), doc_id.value().into());

        Ok(TicketReceipt {
            local_doc_id: doc_id,
            data: Value::Object(data),
        })
    }
}
