use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{CredentialError, IssuedToken, TokenEndpoint};

const DEFAULT_EXPIRES_IN: u64 = 3600;

/// Client-credentials exchange against a Cognito-style OAuth2 token
/// endpoint, form-encoded as the ticketing provider requires.
pub struct HttpTokenEndpoint {
    client: reqwest::Client,
    token_url: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: Option<u64>,
}

impl HttpTokenEndpoint {
    pub fn new(token_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token_url,
        }
    }
}

#[async_trait]
impl TokenEndpoint for HttpTokenEndpoint {
    async fn exchange(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<IssuedToken, CredentialError> {
        let response = self
            .client
            .post(&self.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", client_id),
                ("client_secret", client_secret),
            ])
            .send()
            .await
            .map_err(|e| CredentialError::ExchangeFailed(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(CredentialError::RejectedExchange { status, body });
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| CredentialError::ExchangeFailed(format!("body: {e}")))?;

        Ok(IssuedToken {
            access_token: token.access_token,
            expires_in: token.expires_in.unwrap_or(DEFAULT_EXPIRES_IN),
        })
    }
}
