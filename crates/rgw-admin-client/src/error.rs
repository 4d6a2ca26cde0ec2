//! Admin client error types.

use rgw_admin_auth::AuthError;
use rgw_admin_model::{ResponseError, StatusError, UnparsableResponse, ValidationError};

use crate::config::ConfigError;
use crate::transport::TransportError;

/// Errors returned by admin operations.
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    /// The client or request could not be set up.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The gateway answered with a reason code.
    #[error(transparent)]
    Status(#[from] StatusError),

    /// The gateway answered with an error body that could not be interpreted.
    #[error(transparent)]
    UnparsableResponse(#[from] UnparsableResponse),

    /// A required argument is missing or invalid.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// The request could not be delivered.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A successful response body did not match the expected shape.
    #[error("failed to decode {type_name} from response: {source}")]
    Decode {
        /// The type the body was decoded into.
        type_name: &'static str,
        /// The raw body.
        body: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },
}

impl From<ResponseError> for AdminError {
    fn from(err: ResponseError) -> Self {
        match err {
            ResponseError::Status(status) => Self::Status(status),
            ResponseError::Unparsable(unparsable) => Self::UnparsableResponse(unparsable),
        }
    }
}

impl From<AuthError> for AdminError {
    fn from(err: AuthError) -> Self {
        Self::Config(ConfigError::Signing(err))
    }
}

impl AdminError {
    /// The gateway status error, if this is one.
    #[must_use]
    pub fn status(&self) -> Option<&StatusError> {
        match self {
            Self::Status(status) => Some(status),
            _ => None,
        }
    }

    /// Whether the gateway reported `reason`.
    #[must_use]
    pub fn is_reason(&self, reason: impl AsRef<str>) -> bool {
        self.status().is_some_and(|status| status.is_reason(reason))
    }
}

/// Convenience result type for admin operations.
pub type AdminResult<T> = Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use rgw_admin_model::{ErrorReason, parse_error_response};

    use super::*;

    #[test]
    fn test_should_convert_status_response() {
        let err: AdminError =
            parse_error_response(br#"{"Code":"NoSuchUser","RequestId":"tx1","HostId":"h"}"#).into();
        assert!(err.is_reason(ErrorReason::NO_SUCH_USER));
        assert!(!err.is_reason(ErrorReason::NO_SUCH_SUB_USER));
        assert_eq!(err.to_string(), "NoSuchUser tx1 h");
    }

    #[test]
    fn test_should_convert_unparsable_response() {
        let err: AdminError = parse_error_response(b"gateway timeout").into();
        assert!(matches!(err, AdminError::UnparsableResponse(_)));
        assert!(err.status().is_none());
        assert!(err.to_string().contains("gateway timeout"));
    }

    #[test]
    fn test_should_describe_invalid_input() {
        let err = AdminError::from(ValidationError::MissingField("user id"));
        assert_eq!(err.to_string(), "invalid input: user id is required");
    }
}
