use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::application::ports::{CredentialError, TokenEndpoint};

/// Tokens are treated as stale this long before their reported expiry.
const EXPIRY_SAFETY_MARGIN: Duration = Duration::from_secs(30);

/// Process-wide cache for the ticketing API bearer token.
///
/// Holds a single slot that is replaced atomically on refresh. The slot
/// lock is held across the credential exchange, so concurrent callers
/// racing past an expired token single-flight the refresh: one performs
/// the exchange, the rest await it and read the fresh token.
pub struct CredentialCache<E>
where
    E: TokenEndpoint,
{
    endpoint: Arc<E>,
    client_id: String,
    client_secret: String,
    slot: Mutex<Option<CachedToken>>,
}

struct CachedToken {
    value: String,
    expires_at: Instant,
}

impl<E> CredentialCache<E>
where
    E: TokenEndpoint,
{
    pub fn new(endpoint: Arc<E>, client_id: String, client_secret: String) -> Self {
        Self {
            endpoint,
            client_id,
            client_secret,
            slot: Mutex::new(None),
        }
    }

    /// Returns the cached token while it is still comfortably inside its
    /// lifetime, otherwise exchanges client credentials for a new one.
    pub async fn get_token(&self) -> Result<String, CredentialError> {
        let mut slot = self.slot.lock().await;

        if let Some(token) = slot.as_ref() {
            if Instant::now() + EXPIRY_SAFETY_MARGIN < token.expires_at {
                return Ok(token.value.clone());
            }
        }

        if self.client_id.is_empty() || self.client_secret.is_empty() {
            tracing::error!("Ticketing client credentials missing from configuration");
            return Err(CredentialError::MissingCredentials);
        }

        tracing::info!("Fetching new ticketing API token");
        let issued = self
            .endpoint
            .exchange(&self.client_id, &self.client_secret)
            .await?;

        tracing::info!(expires_in = issued.expires_in, "New token obtained");

        let token = CachedToken {
            value: issued.access_token,
            expires_at: Instant::now() + Duration::from_secs(issued.expires_in),
        };
        let value = token.value.clone();
        *slot = Some(token);

        Ok(value)
    }
}
