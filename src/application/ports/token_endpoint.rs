use async_trait::async_trait;

/// OAuth2-style token endpoint performing a client-credentials exchange.
#[async_trait]
pub trait TokenEndpoint: Send + Sync {
    async fn exchange(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<IssuedToken, CredentialError>;
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    /// Lifetime in seconds, as reported by the endpoint.
    pub expires_in: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("client credentials not configured")]
    MissingCredentials,
    #[error("token exchange failed: {0}")]
    ExchangeFailed(String),
    #[error("token endpoint returned {status}: {body}")]
    RejectedExchange { status: u16, body: String },
}
