//! Error types for SigV4 request signing.
//!
//! Signing is total over well-formed input. The only failures are a request
//! whose URI cannot be resolved to a host, and header values that cannot be
//! represented on the wire.

/// Errors that can occur while signing an admin request.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The request URI carries no host, so neither the `Host` header nor the
    /// canonical request can be built.
    #[error("request URI has no resolvable host: {0:?}")]
    UnresolvableUri(String),

    /// A computed header value contains bytes that are not valid in an HTTP
    /// header (for example a control character in the access key).
    #[error("invalid value for header {name}")]
    InvalidHeaderValue {
        /// The header that could not be set.
        name: &'static str,
        /// The underlying conversion error.
        #[source]
        source: http::header::InvalidHeaderValue,
    },
}
