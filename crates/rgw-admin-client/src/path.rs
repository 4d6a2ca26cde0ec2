//! Admin URL construction.

use rgw_admin_auth::canonical::uri_encode;
use rgw_admin_model::QueryArgs;

/// Path prefix every admin resource lives under.
pub const ADMIN_PATH: &str = "/admin";

/// Join endpoint, admin prefix, resource path and encoded arguments.
///
/// A resource path that already addresses a sub-resource (`/bucket?policy`)
/// gets its arguments appended with `&`, any other with `?`. An empty argument
/// string adds no separator.
///
/// # Examples
///
/// ```
/// use rgw_admin_client::path::build_query_path;
///
/// assert_eq!(
///     build_query_path("http://host", "/user", "format=json"),
///     "http://host/admin/user?format=json"
/// );
/// assert_eq!(
///     build_query_path("http://host", "/user?quota", "format=json"),
///     "http://host/admin/user?quota&format=json"
/// );
/// ```
#[must_use]
pub fn build_query_path(endpoint: &str, resource_path: &str, encoded_args: &str) -> String {
    let separator = match (encoded_args.is_empty(), resource_path.contains('?')) {
        (true, _) => "",
        (false, true) => "&",
        (false, false) => "?",
    };
    format!("{endpoint}{ADMIN_PATH}{resource_path}{separator}{encoded_args}")
}

/// Percent-encode the present arguments in insertion order.
#[must_use]
pub fn encode_query(args: &QueryArgs) -> String {
    args.present()
        .map(|(name, value)| format!("{}={}", uri_encode(name), uri_encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}
