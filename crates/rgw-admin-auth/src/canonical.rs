//! Canonical request construction for AWS Signature Version 4.
//!
//! Admin calls always sign the same three headers and never hash a body, so
//! the canonical request takes the shape:
//!
//! ```text
//! HTTPRequestMethod\n
//! CanonicalURI\n
//! CanonicalQueryString\n
//! host:<host>\n
//! x-amz-content-sha256:UNSIGNED-PAYLOAD\n
//! x-amz-date:<amz date>\n
//! \n
//! host;x-amz-content-sha256;x-amz-date\n
//! UNSIGNED-PAYLOAD
//! ```
//!
//! Every component is normalized so that the output is byte-identical for the
//! same logical request regardless of how its URI was originally encoded.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, percent_encode, utf8_percent_encode};

/// Payload hash sentinel. Admin requests are signed without hashing a body.
pub const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

/// The fixed, already sorted, list of signed header names.
pub const SIGNED_HEADERS: &str = "host;x-amz-content-sha256;x-amz-date";

/// RFC 3986 unreserved characters (A-Z, a-z, 0-9, `-`, `_`, `.`, `~`) are left
/// alone, everything else is percent-encoded.
const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Values of the three signed headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedHeaderValues<'a> {
    /// `host` header, `host` or `host:port`.
    pub host: &'a str,
    /// `x-amz-content-sha256` header.
    pub content_sha256: &'a str,
    /// `x-amz-date` header, `yyyyMMddTHHmmssZ`.
    pub amz_date: &'a str,
}

/// Build the full canonical request string.
///
/// # Examples
///
/// ```
/// use rgw_admin_auth::canonical::{SignedHeaderValues, UNSIGNED_PAYLOAD, build_canonical_request};
///
/// let uri: http::Uri = "http://192.168.0.1/admin/user?format=json".parse().unwrap();
/// let canonical = build_canonical_request(
///     "GET",
///     &uri,
///     &SignedHeaderValues {
///         host: "192.168.0.1",
///         content_sha256: UNSIGNED_PAYLOAD,
///         amz_date: "20191215T120000Z",
///     },
/// );
/// assert!(canonical.starts_with("GET\n/admin/user\nformat=json\nhost:192.168.0.1\n"));
/// ```
#[must_use]
pub fn build_canonical_request(
    method: &str,
    uri: &http::Uri,
    headers: &SignedHeaderValues<'_>,
) -> String {
    let canonical_uri = build_canonical_uri(uri.path());
    let canonical_query = build_canonical_query_string(uri.query().unwrap_or(""));
    let canonical_headers = build_canonical_headers(headers);

    format!(
        "{method}\n{canonical_uri}\n{canonical_query}\n{canonical_headers}\n{SIGNED_HEADERS}\n{UNSIGNED_PAYLOAD}"
    )
}

/// Build the canonical URI by URI-encoding each path segment individually.
///
/// Forward slashes are preserved. Empty paths are normalized to `/`.
///
/// # Examples
///
/// ```
/// use rgw_admin_auth::canonical::build_canonical_uri;
///
/// assert_eq!(build_canonical_uri("/admin/user"), "/admin/user");
/// assert_eq!(build_canonical_uri(""), "/");
/// assert_eq!(build_canonical_uri("/a b/~c"), "/a%20b/~c");
/// ```
#[must_use]
pub fn build_canonical_uri(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_owned();
    }

    path.split('/')
        // Decode first so that already-encoded input is not encoded twice.
        .map(|segment| encode_bytes(&percent_decode(segment)))
        .collect::<Vec<_>>()
        .join("/")
}

/// Build the canonical query string.
///
/// Each `key=value` pair is percent-decoded, the pairs are sorted by key then
/// value (byte-wise), and both halves are re-encoded over the unreserved set.
/// Slashes are encoded here, unlike in the path. A bare key canonicalizes as
/// `key=`. A leading `?` is ignored.
///
/// # Examples
///
/// ```
/// use rgw_admin_auth::canonical::build_canonical_query_string;
///
/// assert_eq!(build_canonical_query_string(""), "");
/// assert_eq!(build_canonical_query_string("quota&format=json"), "format=json&quota=");
/// assert_eq!(build_canonical_query_string("b=x/y&a=1"), "a=1&b=x%2Fy");
/// ```
#[must_use]
pub fn build_canonical_query_string(query: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    if query.is_empty() {
        return String::new();
    }

    let mut params: Vec<(Vec<u8>, Vec<u8>)> = query
        .split('&')
        .filter(|s| !s.is_empty())
        .map(|param| {
            let (key, value) = param.split_once('=').unwrap_or((param, ""));
            (percent_decode(key), percent_decode(value))
        })
        .collect();

    params.sort_unstable();

    params
        .iter()
        .map(|(k, v)| format!("{}={}", encode_bytes(k), encode_bytes(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the canonical headers block.
///
/// Every line, including the last one, is terminated by `\n`; the canonical
/// request then adds the separator newline before the signed header list.
///
/// # Examples
///
/// ```
/// use rgw_admin_auth::canonical::{SignedHeaderValues, build_canonical_headers};
///
/// let block = build_canonical_headers(&SignedHeaderValues {
///     host: "rgw.local:8080",
///     content_sha256: "UNSIGNED-PAYLOAD",
///     amz_date: "20191215T120000Z",
/// });
/// assert_eq!(
///     block,
///     "host:rgw.local:8080\nx-amz-content-sha256:UNSIGNED-PAYLOAD\nx-amz-date:20191215T120000Z\n"
/// );
/// ```
#[must_use]
pub fn build_canonical_headers(headers: &SignedHeaderValues<'_>) -> String {
    format!(
        "host:{}\nx-amz-content-sha256:{}\nx-amz-date:{}\n",
        headers.host.trim(),
        headers.content_sha256.trim(),
        headers.amz_date.trim()
    )
}

/// Percent-encode a string over the RFC 3986 unreserved set.
///
/// `~` is never escaped and `/` always is. This is the encoding used for both
/// path segments and query components when signing.
#[must_use]
pub fn uri_encode(input: &str) -> String {
    utf8_percent_encode(input, URI_ENCODE_SET).to_string()
}

// Decoded components stay raw bytes: an escape such as `%FF` that is not valid
// UTF-8 must re-encode to itself, not to U+FFFD.
fn percent_decode(input: &str) -> Vec<u8> {
    percent_decode_str(input).collect()
}

fn encode_bytes(input: &[u8]) -> String {
    percent_encode(input, URI_ENCODE_SET).to_string()
}
