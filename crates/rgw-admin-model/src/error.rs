//! Error mapping for non-success admin responses.
//!
//! RGW reports failures as a JSON object with optional `Code`, `RequestId`
//! and `HostId` fields. [`parse_error_response`] turns such a body into a
//! [`StatusError`], or into an [`UnparsableResponse`] that keeps the raw body
//! when no usable code can be extracted.
//!
//! Reason codes are an open set: [`ErrorReason`] names the codes the gateway
//! is known to emit, but any other code still yields a valid [`StatusError`].

use std::borrow::Cow;
use std::fmt;

use serde::Deserialize;
use tracing::debug;

/// A gateway error reason code.
///
/// This is a string newtype rather than a closed enum so that codes added by
/// newer gateways can still be represented and compared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorReason(Cow<'static, str>);

macro_rules! error_reasons {
    ($($(#[$doc:meta])* $name:ident => $code:literal,)+) => {
        impl ErrorReason {
            $(
                $(#[$doc])*
                pub const $name: Self = Self(Cow::Borrowed($code));
            )+
        }

        /// Every reason code in the catalogue.
        pub const KNOWN_REASONS: &[&str] = &[$($code),+];
    };
}

error_reasons! {
    /// The user already exists.
    USER_ALREADY_EXISTS => "UserAlreadyExists",
    /// The user does not exist.
    NO_SUCH_USER => "NoSuchUser",
    /// The access key is malformed or unknown.
    INVALID_ACCESS_KEY => "InvalidAccessKey",
    /// The secret key is malformed.
    INVALID_SECRET_KEY => "InvalidSecretKey",
    /// The key type is neither `s3` nor `swift`.
    INVALID_KEY_TYPE => "InvalidKeyType",
    /// The key already exists.
    KEY_EXISTS => "KeyExists",
    /// Another user already uses this email.
    EMAIL_EXISTS => "EmailExists",
    /// The capability string is malformed.
    INVALID_CAPABILITY => "InvalidCapability",
    /// The subuser already exists.
    SUBUSER_EXISTS => "SubuserExists",
    /// The subuser does not exist.
    NO_SUCH_SUB_USER => "NoSuchSubUser",
    /// The subuser access level is invalid.
    INVALID_ACCESS => "InvalidAccess",
    /// The bucket index could not be repaired.
    INDEX_REPAIR_FAILED => "IndexRepairFailed",
    /// The bucket still holds objects.
    BUCKET_NOT_EMPTY => "BucketNotEmpty",
    /// Purging bucket objects failed.
    OBJECT_REMOVAL_FAILED => "ObjectRemovalFailed",
    /// Unlinking the bucket failed.
    BUCKET_UNLINK_FAILED => "BucketUnlinkFailed",
    /// Linking the bucket failed.
    BUCKET_LINK_FAILED => "BucketLinkFailed",
    /// The object does not exist.
    NO_SUCH_OBJECT => "NoSuchObject",
    /// The request body was truncated.
    INCOMPLETE_BODY => "IncompleteBody",
    /// The capability is not granted to the user.
    NO_SUCH_CAP => "NoSuchCap",
    /// The gateway failed internally.
    INTERNAL_ERROR => "InternalError",
    /// The caller lacks the admin capability for this call.
    ACCESS_DENIED => "AccessDenied",
    /// The bucket does not exist.
    NO_SUCH_BUCKET => "NoSuchBucket",
    /// The key does not exist.
    NO_SUCH_KEY => "NoSuchKey",
    /// A request argument was rejected.
    INVALID_ARGUMENT => "InvalidArgument",
    /// Catch-all for codes outside the catalogue.
    UNKNOWN => "Unknown",
    /// The request signature did not verify.
    SIGNATURE_DOES_NOT_MATCH => "SignatureDoesNotMatch",
    /// The account already exists.
    ACCOUNT_ALREADY_EXISTS => "AccountAlreadyExists",
}

impl ErrorReason {
    /// Create a reason from an arbitrary code.
    pub fn new(code: impl Into<Cow<'static, str>>) -> Self {
        Self(code.into())
    }

    /// The code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this code is part of the documented catalogue.
    #[must_use]
    pub fn is_known(&self) -> bool {
        KNOWN_REASONS.contains(&self.as_str())
    }
}

impl AsRef<str> for ErrorReason {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for ErrorReason {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ErrorReason {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// A structured error returned by the gateway for a non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusError {
    code: String,
    request_id: String,
    host_id: String,
}

impl StatusError {
    /// Create a status error. Empty ids are allowed.
    pub fn new(
        code: impl Into<String>,
        request_id: impl Into<String>,
        host_id: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            request_id: request_id.into(),
            host_id: host_id.into(),
        }
    }

    /// The raw reason code as sent by the gateway.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The gateway request id, empty if absent.
    #[must_use]
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// The gateway host id, empty if absent.
    #[must_use]
    pub fn host_id(&self) -> &str {
        &self.host_id
    }

    /// Whether the code equals `reason` (ordinal comparison).
    ///
    /// # Examples
    ///
    /// ```
    /// use rgw_admin_model::error::{ErrorReason, StatusError};
    ///
    /// let err = StatusError::new("NoSuchUser", "tx000", "host");
    /// assert!(err.is_reason(ErrorReason::NO_SUCH_USER));
    /// assert!(err.is_reason("NoSuchUser"));
    /// assert!(!err.is_reason(ErrorReason::NO_SUCH_SUB_USER));
    /// ```
    #[must_use]
    pub fn is_reason(&self, reason: impl AsRef<str>) -> bool {
        self.code == reason.as_ref()
    }

    /// The catalogued reason for this error, or [`ErrorReason::UNKNOWN`] when
    /// the gateway sent a code outside the catalogue.
    #[must_use]
    pub fn known_reason(&self) -> ErrorReason {
        KNOWN_REASONS
            .iter()
            .find(|known| **known == self.code)
            .map_or(ErrorReason::UNKNOWN, |known| ErrorReason::new(*known))
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{} {} {}", self.code, self.request_id, self.host_id);
        f.write_str(text.trim())
    }
}

impl std::error::Error for StatusError {}

/// A non-2xx response whose body carried no usable reason code.
#[derive(Debug, thiserror::Error)]
#[error("failed to unmarshal radosgw http response. {body}")]
pub struct UnparsableResponse {
    body: String,
    #[source]
    source: Option<serde_json::Error>,
}

impl UnparsableResponse {
    /// Create an unparsable response error for the given raw body.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            source: None,
        }
    }

    /// The raw response body, verbatim.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Result of mapping a non-success response body.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    /// The body carried a reason code.
    #[error(transparent)]
    Status(#[from] StatusError),
    /// The body could not be interpreted.
    #[error(transparent)]
    Unparsable(#[from] UnparsableResponse),
}

#[derive(Debug, Default, Deserialize)]
struct ErrorPayload {
    #[serde(rename = "Code", default)]
    code: Option<String>,
    #[serde(rename = "RequestId", default)]
    request_id: Option<String>,
    #[serde(rename = "HostId", default)]
    host_id: Option<String>,
}

// The body must be a JSON object. Arrays would otherwise fill the fields by position.
fn decode_payload(body: &[u8]) -> Result<ErrorPayload, serde_json::Error> {
    let object: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(body)?;
    serde_json::from_value(serde_json::Value::Object(object))
}

/// Map a non-2xx response body to a typed error.
///
/// # Examples
///
/// ```
/// use rgw_admin_model::error::{ResponseError, parse_error_response};
///
/// let err = parse_error_response(br#"{"Code":"NoSuchBucket","RequestId":"tx1","HostId":"h"}"#);
/// assert!(matches!(err, ResponseError::Status(ref s) if s.code() == "NoSuchBucket"));
///
/// let err = parse_error_response(b"<html>502 Bad Gateway</html>");
/// assert!(err.to_string().contains("502 Bad Gateway"));
/// ```
#[must_use]
pub fn parse_error_response(body: &[u8]) -> ResponseError {
    let raw = String::from_utf8_lossy(body).into_owned();

    match decode_payload(body) {
        Ok(payload) => match payload.code {
            Some(code) if !code.trim().is_empty() => StatusError {
                code,
                request_id: payload.request_id.unwrap_or_default(),
                host_id: payload.host_id.unwrap_or_default(),
            }
            .into(),
            _ => {
                debug!(body = %raw, "Error response carries no reason code");
                UnparsableResponse::new(raw).into()
            }
        },
        Err(source) => {
            debug!(body = %raw, error = %source, "Error response is not valid JSON");
            UnparsableResponse {
                body: raw,
                source: Some(source),
            }
            .into()
        }
    }
}
