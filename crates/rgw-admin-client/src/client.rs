//! The admin client.
//!
//! [`RgwAdminClient`] turns an operation into `/admin<path>?format=json&...`,
//! signs it with SigV4 and hands it to a [`Transport`]. Any response with a
//! status of 300 or above is mapped to a typed error from its body.

use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use http::Method;
use rgw_admin_auth::{Credentials, Signer};
use rgw_admin_model::{QueryArgs, parse_error_response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::{AdminConfig, ConfigError};
use crate::error::{AdminError, AdminResult};
use crate::path::{build_query_path, encode_query};
use crate::transport::{ReqwestTransport, Transport};

/// Client for the RGW admin API.
///
/// Cheap to clone and safe to share across tasks; every call builds and signs
/// its own request.
#[derive(Debug, Clone)]
pub struct RgwAdminClient {
    endpoint: String,
    credentials: Credentials,
    signer: Signer,
    transport: Arc<dyn Transport>,
}

impl RgwAdminClient {
    /// Create a client with the default region, service and timeout.
    pub fn new(
        endpoint: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = AdminConfig::builder()
            .endpoint(endpoint)
            .access_key(access_key)
            .secret_key(secret_key)
            .build();
        Self::from_config(&config)
    }

    /// Create a client backed by `reqwest`.
    pub fn from_config(config: &AdminConfig) -> Result<Self, ConfigError> {
        let endpoint = validate(config)?;
        let transport =
            ReqwestTransport::new(config.timeout()).map_err(ConfigError::HttpClient)?;
        Ok(Self::assemble(config, endpoint, Arc::new(transport)))
    }

    /// Create a client that sends through `transport`.
    pub fn with_transport(
        config: &AdminConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, ConfigError> {
        let endpoint = validate(config)?;
        Ok(Self::assemble(config, endpoint, transport))
    }

    fn assemble(config: &AdminConfig, endpoint: String, transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint,
            credentials: Credentials::new(config.access_key.as_str(), config.secret_key.as_str()),
            signer: Signer::new(config.region.as_str(), config.service.as_str()),
            transport,
        }
    }

    /// The endpoint, without trailing slashes.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The signer used for every request.
    #[must_use]
    pub fn signer(&self) -> &Signer {
        &self.signer
    }

    /// Build and sign a request without sending it.
    pub fn build_signed_request(
        &self,
        method: Method,
        path: &str,
        args: &QueryArgs,
        timestamp: DateTime<Utc>,
    ) -> AdminResult<http::Request<()>> {
        let url = build_query_path(&self.endpoint, path, &encode_query(args));
        let mut request = http::Request::builder()
            .method(method)
            .uri(url.as_str())
            .body(())
            .map_err(|source| ConfigError::InvalidRequestUrl { url, source })?;
        self.signer.sign(&mut request, &self.credentials, timestamp)?;
        Ok(request)
    }

    /// Send an admin call and return the body of a successful response.
    pub async fn call(&self, method: Method, path: &str, args: &QueryArgs) -> AdminResult<Bytes> {
        let request = self.build_signed_request(method, path, args, Utc::now())?;
        debug!(method = %request.method(), uri = %request.uri(), "Sending admin request");

        let response = self.transport.send(request).await?;
        let status = response.status();
        let body = response.into_body();

        if status.as_u16() >= 300 {
            warn!(status = status.as_u16(), path, "Admin request failed");
            return Err(parse_error_response(&body).into());
        }
        Ok(body)
    }

    /// Send an admin call and decode the JSON body.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        args: &QueryArgs,
    ) -> AdminResult<T> {
        let body = self.call(method, path, args).await?;
        serde_json::from_slice(&body).map_err(|source| AdminError::Decode {
            type_name: std::any::type_name::<T>(),
            body: String::from_utf8_lossy(&body).into_owned(),
            source,
        })
    }

    /// Send an admin call whose response body carries nothing of interest.
    pub async fn call_unit(&self, method: Method, path: &str, args: &QueryArgs) -> AdminResult<()> {
        self.call(method, path, args).await?;
        Ok(())
    }
}

/// Check the configuration in order (endpoint, access key, secret key) and
/// return the endpoint without trailing slashes.
fn validate(config: &AdminConfig) -> Result<String, ConfigError> {
    if config.endpoint.trim().is_empty() {
        return Err(ConfigError::MissingEndpoint);
    }
    if config.access_key.trim().is_empty() {
        return Err(ConfigError::MissingAccessKey);
    }
    if config.secret_key.trim().is_empty() {
        return Err(ConfigError::MissingSecretKey);
    }

    let endpoint = config.endpoint.trim().trim_end_matches('/');
    let uri: http::Uri = endpoint
        .parse()
        .map_err(|_| ConfigError::InvalidEndpoint(config.endpoint.clone()))?;
    if uri.scheme().is_none() || uri.host().is_none() {
        return Err(ConfigError::InvalidEndpoint(config.endpoint.clone()));
    }
    Ok(endpoint.to_owned())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use http::StatusCode;
    use http::header::AUTHORIZATION;
    use rgw_admin_model::ErrorReason;

    use super::*;
    use crate::test_support::{MockTransport, test_client};

    fn config(endpoint: &str, access_key: &str, secret_key: &str) -> AdminConfig {
        AdminConfig::builder()
            .endpoint(endpoint)
            .access_key(access_key)
            .secret_key(secret_key)
            .build()
    }

    fn reference_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, 12, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_should_reject_missing_endpoint() {
        let err = RgwAdminClient::new("", "ak", "sk").unwrap_err();
        assert!(matches!(err, ConfigError::MissingEndpoint));
        assert_eq!(err.to_string(), "endpoint not set");
    }

    #[test]
    fn test_should_reject_missing_access_key() {
        let err = RgwAdminClient::new("http://rgw", "  ", "sk").unwrap_err();
        assert!(matches!(err, ConfigError::MissingAccessKey));
    }

    #[test]
    fn test_should_reject_missing_secret_key() {
        let err = RgwAdminClient::new("http://rgw", "ak", "").unwrap_err();
        assert!(matches!(err, ConfigError::MissingSecretKey));
    }

    #[test]
    fn test_should_check_endpoint_before_keys() {
        let err = RgwAdminClient::new(" ", "", "").unwrap_err();
        assert!(matches!(err, ConfigError::MissingEndpoint));
    }

    #[test]
    fn test_should_reject_relative_endpoint() {
        let transport = Arc::new(MockTransport::default());
        let err =
            RgwAdminClient::with_transport(&config("rgw.local/admin", "ak", "sk"), transport)
                .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint(_)));
    }

    #[test]
    fn test_should_trim_trailing_slashes() {
        let transport = Arc::new(MockTransport::default());
        let client =
            RgwAdminClient::with_transport(&config("http://rgw:8080//", "ak", "sk"), transport)
                .unwrap();
        assert_eq!(client.endpoint(), "http://rgw:8080");
    }

    #[test]
    fn test_should_build_reference_signed_request() {
        let transport = Arc::new(MockTransport::default());
        let client = RgwAdminClient::with_transport(
            &config(
                "http://192.168.0.1/",
                "AKIDEXAMPLE",
                "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY",
            ),
            transport,
        )
        .unwrap();

        let request = client
            .build_signed_request(Method::GET, "/user", &QueryArgs::admin(), reference_time())
            .unwrap();

        assert_eq!(request.uri(), "http://192.168.0.1/admin/user?format=json");
        assert_eq!(
            request.headers()[AUTHORIZATION],
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20191215/default/s3/aws4_request, \
             SignedHeaders=host;x-amz-content-sha256;x-amz-date, \
             Signature=e424a9dbaf86e28298f69e68fcfeb557f8cfc2a9a37069b281667a45bc3cfbc3"
        );
        assert_eq!(request.headers()["x-amz-date"], "20191215T120000Z");
        assert_eq!(request.headers()["x-amz-content-sha256"], "UNSIGNED-PAYLOAD");
        assert_eq!(request.headers()["host"], "192.168.0.1");
    }

    #[tokio::test]
    async fn test_should_return_body_on_success() {
        let (client, transport) = test_client();
        transport.respond(StatusCode::OK, r#"{"ok":true}"#);

        let body = client
            .call(Method::GET, "/info", &QueryArgs::admin())
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"ok":true}"#);

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::GET);
        assert_eq!(sent[0].uri, "http://rgw.test:8080/admin/info?format=json");
        assert!(sent[0].headers.contains_key(AUTHORIZATION));
    }

    #[tokio::test]
    async fn test_should_map_status_error() {
        let (client, transport) = test_client();
        transport.respond(
            StatusCode::NOT_FOUND,
            r#"{"Code":"NoSuchUser","RequestId":"tx000","HostId":"host"}"#,
        );

        let err = client
            .call(Method::GET, "/user", &QueryArgs::admin().with("uid", "ghost"))
            .await
            .unwrap_err();
        assert!(err.is_reason(ErrorReason::NO_SUCH_USER));
        assert_eq!(err.status().unwrap().request_id(), "tx000");
    }

    #[tokio::test]
    async fn test_should_treat_redirect_as_error() {
        let (client, transport) = test_client();
        transport.respond(StatusCode::MOVED_PERMANENTLY, "<html>moved</html>");

        let err = client
            .call(Method::GET, "/info", &QueryArgs::admin())
            .await
            .unwrap_err();
        match err {
            AdminError::UnparsableResponse(unparsable) => {
                assert_eq!(unparsable.body(), "<html>moved</html>");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_should_report_decode_failure() {
        let (client, transport) = test_client();
        transport.respond(StatusCode::OK, "not json");

        let err = client
            .call_json::<Vec<String>>(Method::GET, "/metadata/user", &QueryArgs::admin())
            .await
            .unwrap_err();
        match err {
            AdminError::Decode { body, .. } => assert_eq!(body, "not json"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
