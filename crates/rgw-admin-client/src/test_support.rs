//! In-memory transport for client tests.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use parking_lot::Mutex;

use crate::client::RgwAdminClient;
use crate::config::AdminConfig;
use crate::transport::{Transport, TransportError};

/// A request as seen by the transport.
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: Method,
    pub uri: String,
    pub headers: HeaderMap,
}

/// Records every request and replays queued responses, `200` with an empty
/// body once the queue runs dry.
#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<VecDeque<(StatusCode, Bytes)>>,
}

impl MockTransport {
    pub(crate) fn respond(&self, status: StatusCode, body: impl Into<Bytes>) {
        self.responses.lock().push_back((status, body.into()));
    }

    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    pub(crate) fn last(&self) -> RecordedRequest {
        self.requests
            .lock()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: http::Request<()>) -> Result<http::Response<Bytes>, TransportError> {
        self.requests.lock().push(RecordedRequest {
            method: request.method().clone(),
            uri: request.uri().to_string(),
            headers: request.headers().clone(),
        });

        let (status, body) = self
            .responses
            .lock()
            .pop_front()
            .unwrap_or((StatusCode::OK, Bytes::new()));
        Ok(http::Response::builder().status(status).body(body)?)
    }
}

/// A client for `http://rgw.test:8080` wired to a fresh [`MockTransport`].
pub(crate) fn test_client() -> (RgwAdminClient, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport::default());
    let config = AdminConfig::builder()
        .endpoint("http://rgw.test:8080")
        .access_key("AKIDEXAMPLE")
        .secret_key("wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY")
        .build();
    let client = RgwAdminClient::with_transport(&config, transport.clone())
        .expect("test configuration is valid");
    (client, transport)
}
