use async_trait::async_trait;
use reqwest::multipart;
use serde_json::Value;

use crate::application::ports::{TicketAttachment, TicketGateway, TicketGatewayError};

/// Fittcore ticket endpoint: bearer-authenticated multipart POST carrying
/// the transcription as a text/plain file part.
pub struct FittcoreGateway {
    client: reqwest::Client,
    api_base: String,
}

impl FittcoreGateway {
    pub fn new(api_base: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base,
        }
    }
}

#[async_trait]
impl TicketGateway for FittcoreGateway {
    async fn submit(
        &self,
        bearer_token: &str,
        team_id: &str,
        attachment: TicketAttachment,
    ) -> Result<Value, TicketGatewayError> {
        let file_part = multipart::Part::bytes(attachment.content)
            .file_name(attachment.filename)
            .mime_str("text/plain")
            .map_err(|e| TicketGatewayError::Transport(format!("mime: {e}")))?;

        let form = multipart::Form::new().part("file", file_part);

        let response = self
            .client
            .post(&self.api_base)
            .query(&[("teamId", team_id)])
            .bearer_auth(bearer_token)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TicketGatewayError::Transport(format!("request: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TicketGatewayError::Transport(format!("body: {e}")))?;

        tracing::info!(status = %status, "Fittcore API responded");

        if !status.is_success() {
            return Err(TicketGatewayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        if body.is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }

        serde_json::from_str(&body)
            .map_err(|e| TicketGatewayError::Transport(format!("invalid json response: {e}")))
    }
}
