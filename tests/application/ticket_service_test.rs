use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::Value;
use wardvoice::application::ports::{
    CredentialError, IssuedToken, TicketAttachment, TicketGateway, TicketGatewayError,
    TokenEndpoint,
};
use wardvoice::application::services::{CredentialCache, TicketError, TicketService};

struct StaticEndpoint {
    exchanges: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl TokenEndpoint for StaticEndpoint {
    async fn exchange(
        &self,
        _client_id: &str,
        _client_secret: &str,
    ) -> Result<IssuedToken, CredentialError> {
        self.exchanges.fetch_add(1, Ordering::SeqCst);
        Ok(IssuedToken {
            access_token: "bearer-token".to_string(),
            expires_in: 3600,
        })
    }
}

struct RecordingGateway {
    contents: Arc<Mutex<Vec<String>>>,
    transport_failure: bool,
}

#[async_trait::async_trait]
impl TicketGateway for RecordingGateway {
    async fn submit(
        &self,
        _bearer_token: &str,
        _team_id: &str,
        attachment: TicketAttachment,
    ) -> Result<Value, TicketGatewayError> {
        if self.transport_failure {
            return Err(TicketGatewayError::Transport("connection reset".to_string()));
        }
        self.contents
            .lock()
            .unwrap()
            .push(String::from_utf8(attachment.content).unwrap());
        Ok(serde_json::json!({"ticketId": "t-1"}))
    }
}

fn service(
    gateway: RecordingGateway,
) -> (
    TicketService<StaticEndpoint, RecordingGateway>,
    Arc<AtomicUsize>,
) {
    let exchanges = Arc::new(AtomicUsize::new(0));
    let endpoint = StaticEndpoint {
        exchanges: Arc::clone(&exchanges),
    };
    let credentials = Arc::new(CredentialCache::new(
        Arc::new(endpoint),
        "client-id".to_string(),
        "client-secret".to_string(),
    ));
    (
        TicketService::new(credentials, Arc::new(gateway), "team-default".to_string()),
        exchanges,
    )
}

#[tokio::test]
async fn empty_text_rejected_before_token_fetch() {
    let (service, exchanges) = service(RecordingGateway {
        contents: Arc::new(Mutex::new(Vec::new())),
        transport_failure: false,
    });

    let result = service.submit("", None).await;

    assert!(matches!(result, Err(TicketError::EmptyText)));
    assert_eq!(exchanges.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn payload_starts_with_document_header() {
    let contents = Arc::new(Mutex::new(Vec::new()));
    let (service, _) = service(RecordingGateway {
        contents: Arc::clone(&contents),
        transport_failure: false,
    });

    let receipt = service.submit("ผลตรวจปกติ", None).await.unwrap();

    let recorded = contents.lock().unwrap();
    let expected_header = format!("เลขที่เอกสาร: {}\n\nผลตรวจปกติ", receipt.local_doc_id);
    assert_eq!(recorded[0], expected_header);
    assert_eq!(
        receipt.data["local_doc_id"].as_u64().unwrap(),
        receipt.local_doc_id.value() as u64
    );
    assert_eq!(receipt.data["ticketId"], "t-1");
}

#[tokio::test]
async fn transport_failure_surfaces_as_ticket_error() {
    let (service, _) = service(RecordingGateway {
        contents: Arc::new(Mutex::new(Vec::new())),
        transport_failure: true,
    });

    let result = service.submit("test", None).await;

    assert!(matches!(result, Err(TicketError::Transport(_))));
}
