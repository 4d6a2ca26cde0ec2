//! Request signer.
//!
//! [`Signer`] attaches the four SigV4 headers (`x-amz-date`,
//! `x-amz-content-sha256`, `Host`, `Authorization`) to an outgoing admin
//! request. Every call recomputes the canonical request and the signing key
//! from scratch.

use chrono::{DateTime, Utc};
use http::header::{AUTHORIZATION, HOST, HeaderName, HeaderValue};
use tracing::debug;

use crate::canonical::{SIGNED_HEADERS, SignedHeaderValues, UNSIGNED_PAYLOAD, build_canonical_request};
use crate::credentials::Credentials;
use crate::error::AuthError;
use crate::sigv4::{
    ALGORITHM, build_string_to_sign, compute_signature, credential_scope, derive_signing_key,
    format_amz_date, format_date_stamp, hash_hex,
};

/// Region RGW expects in the credential scope.
pub const DEFAULT_REGION: &str = "default";

/// Service name RGW expects in the credential scope.
pub const DEFAULT_SERVICE: &str = "s3";

const X_AMZ_DATE: HeaderName = HeaderName::from_static("x-amz-date");
const X_AMZ_CONTENT_SHA256: HeaderName = HeaderName::from_static("x-amz-content-sha256");

/// Intermediate values produced while signing a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningOutput {
    /// The canonical request that was hashed.
    pub canonical_request: String,
    /// The string that was signed.
    pub string_to_sign: String,
    /// Lowercase hex signature.
    pub signature: String,
    /// The full `Authorization` header value.
    pub authorization: String,
}

/// SigV4 signer bound to a region and service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signer {
    region: String,
    service: String,
}

impl Default for Signer {
    fn default() -> Self {
        Self::new(DEFAULT_REGION, DEFAULT_SERVICE)
    }
}

impl Signer {
    /// Create a signer for the given region and service.
    pub fn new(region: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            service: service.into(),
        }
    }

    /// Region used in the credential scope.
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Service used in the credential scope.
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Sign `request` in place.
    ///
    /// Any existing `x-amz-date`, `x-amz-content-sha256`, `Host` or
    /// `Authorization` header is replaced. The body is never read.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::UnresolvableUri`] if the request URI has no host.
    /// Nothing is computed and no header is touched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use rgw_admin_auth::{Credentials, Signer};
    ///
    /// let mut request = http::Request::get("http://192.168.0.1/admin/user?format=json")
    ///     .body(())
    ///     .unwrap();
    /// let creds = Credentials::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY");
    /// let ts = Utc.with_ymd_and_hms(2019, 12, 15, 12, 0, 0).unwrap();
    ///
    /// let out = Signer::default().sign(&mut request, &creds, ts).unwrap();
    /// assert_eq!(
    ///     out.signature,
    ///     "e424a9dbaf86e28298f69e68fcfeb557f8cfc2a9a37069b281667a45bc3cfbc3"
    /// );
    /// assert_eq!(request.headers()["host"], "192.168.0.1");
    /// ```
    pub fn sign<B>(
        &self,
        request: &mut http::Request<B>,
        credentials: &Credentials,
        timestamp: DateTime<Utc>,
    ) -> Result<SigningOutput, AuthError> {
        let host = resolve_host(request.uri())?;

        let amz_date = format_amz_date(&timestamp);
        let date_stamp = format_date_stamp(&timestamp);

        let canonical_request = build_canonical_request(
            request.method().as_str(),
            request.uri(),
            &SignedHeaderValues {
                host: &host,
                content_sha256: UNSIGNED_PAYLOAD,
                amz_date: &amz_date,
            },
        );
        debug!(canonical_request, "Built canonical request");

        let scope = credential_scope(&date_stamp, &self.region, &self.service);
        let string_to_sign =
            build_string_to_sign(&amz_date, &scope, &hash_hex(canonical_request.as_bytes()));
        debug!(string_to_sign, "Built string to sign");

        let signing_key = derive_signing_key(
            credentials.secret_key(),
            &date_stamp,
            &self.region,
            &self.service,
        );
        let signature = compute_signature(&signing_key, &string_to_sign);

        let authorization = format!(
            "{ALGORITHM} Credential={}/{scope}, SignedHeaders={SIGNED_HEADERS}, Signature={signature}",
            credentials.access_key()
        );

        // Build every value before mutating so a failure leaves the request untouched.
        let date_value = header_value("x-amz-date", &amz_date)?;
        let host_value = header_value("host", &host)?;
        let auth_value = header_value("authorization", &authorization)?;

        let headers = request.headers_mut();
        headers.insert(X_AMZ_DATE, date_value);
        headers.insert(
            X_AMZ_CONTENT_SHA256,
            HeaderValue::from_static(UNSIGNED_PAYLOAD),
        );
        headers.insert(HOST, host_value);
        headers.insert(AUTHORIZATION, auth_value);

        debug!(
            access_key = credentials.access_key(),
            scope = %scope,
            "Signed admin request"
        );

        Ok(SigningOutput {
            canonical_request,
            string_to_sign,
            signature,
            authorization,
        })
    }
}

/// Resolve the `Host` header value: the host alone when the port is absent or
/// the scheme default, `host:port` otherwise.
fn resolve_host(uri: &http::Uri) -> Result<String, AuthError> {
    let host = uri
        .host()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| AuthError::UnresolvableUri(uri.to_string()))?;

    let default_port = match uri.scheme_str() {
        Some("https") => Some(443),
        Some("http") => Some(80),
        _ => None,
    };

    match uri.port_u16() {
        Some(port) if Some(port) != default_port => Ok(format!("{host}:{port}")),
        _ => Ok(host.to_owned()),
    }
}

fn header_value(name: &'static str, value: &str) -> Result<HeaderValue, AuthError> {
    HeaderValue::from_str(value).map_err(|source| AuthError::InvalidHeaderValue { name, source })
}
