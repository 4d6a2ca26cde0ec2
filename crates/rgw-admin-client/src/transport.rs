//! HTTP transport abstraction.
//!
//! The client hands a fully signed, bodiless request to a [`Transport`] and
//! gets the raw response back. [`ReqwestTransport`] is the default; tests
//! substitute an in-memory implementation.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

/// Errors raised while delivering a request or reading its response.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request could not be sent or the response body could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response could not be represented as an `http::Response`.
    #[error("invalid response: {0}")]
    Response(#[from] http::Error),
}

/// Sends prepared admin requests.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Send `request` and return the complete response.
    async fn send(&self, request: http::Request<()>) -> Result<http::Response<Bytes>, TransportError>;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: http::Request<()>) -> Result<http::Response<Bytes>, TransportError> {
        let (parts, ()) = request.into_parts();
        let response = self
            .client
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .send()
            .await?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        let mut out = http::Response::builder().status(status).body(body)?;
        *out.headers_mut() = headers;
        Ok(out)
    }
}
