use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use wardvoice::application::ports::{CredentialError, IssuedToken, TokenEndpoint};
use wardvoice::application::services::CredentialCache;

struct CountingEndpoint {
    exchanges: Arc<AtomicUsize>,
    expires_in: u64,
}

impl CountingEndpoint {
    fn new(expires_in: u64) -> Self {
        Self {
            exchanges: Arc::new(AtomicUsize::new(0)),
            expires_in,
        }
    }
}

#[async_trait::async_trait]
impl TokenEndpoint for CountingEndpoint {
    async fn exchange(
        &self,
        _client_id: &str,
        _client_secret: &str,
    ) -> Result<IssuedToken, CredentialError> {
        let n = self.exchanges.fetch_add(1, Ordering::SeqCst);
        Ok(IssuedToken {
            access_token: format!("token-{n}"),
            expires_in: self.expires_in,
        })
    }
}

struct RejectingEndpoint;

#[async_trait::async_trait]
impl TokenEndpoint for RejectingEndpoint {
    async fn exchange(
        &self,
        _client_id: &str,
        _client_secret: &str,
    ) -> Result<IssuedToken, CredentialError> {
        Err(CredentialError::RejectedExchange {
            status: 401,
            body: "invalid_client".to_string(),
        })
    }
}

fn cache(endpoint: Arc<CountingEndpoint>) -> CredentialCache<CountingEndpoint> {
    CredentialCache::new(endpoint, "client-id".to_string(), "client-secret".to_string())
}

#[tokio::test]
async fn given_fresh_token_when_requested_twice_then_single_exchange() {
    let endpoint = Arc::new(CountingEndpoint::new(3600));
    let cache = cache(Arc::clone(&endpoint));

    let first = cache.get_token().await.unwrap();
    let second = cache.get_token().await.unwrap();

    assert_eq!(first, "token-0");
    assert_eq!(second, "token-0");
    assert_eq!(endpoint.exchanges.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_expired_token_when_requested_again_then_exactly_one_more_exchange() {
    // expires_in of zero puts the token inside the 30s safety margin
    // immediately, so every call must refresh.
    let endpoint = Arc::new(CountingEndpoint::new(0));
    let cache = cache(Arc::clone(&endpoint));

    let first = cache.get_token().await.unwrap();
    let second = cache.get_token().await.unwrap();

    assert_eq!(first, "token-0");
    assert_eq!(second, "token-1");
    assert_eq!(endpoint.exchanges.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn given_concurrent_callers_when_cache_empty_then_refresh_is_single_flighted() {
    let endpoint = Arc::new(CountingEndpoint::new(3600));
    let cache = Arc::new(cache(Arc::clone(&endpoint)));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let cache = Arc::clone(&cache);
        handles.push(tokio::spawn(async move { cache.get_token().await.unwrap() }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), "token-0");
    }
    assert_eq!(endpoint.exchanges.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_missing_credentials_when_requested_then_fails_without_exchange() {
    let endpoint = Arc::new(CountingEndpoint::new(3600));
    let cache = CredentialCache::new(Arc::clone(&endpoint), String::new(), String::new());

    let result = cache.get_token().await;

    assert!(matches!(result, Err(CredentialError::MissingCredentials)));
    assert_eq!(endpoint.exchanges.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_rejected_exchange_when_requested_then_error_propagates() {
    let cache = CredentialCache::new(
        Arc::new(RejectingEndpoint),
        "client-id".to_string(),
        "client-secret".to_string(),
    );

    let result = cache.get_token().await;

    assert!(matches!(
        result,
        Err(CredentialError::RejectedExchange { status: 401, .. })
    ));
}
