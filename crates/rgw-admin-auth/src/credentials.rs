//! Admin credentials.
//!
//! [`Credentials`] holds the access key / secret key pair used to sign admin
//! requests. The pair is only read while a request is being signed; nothing
//! derived from it is cached.

use std::fmt;

/// An access key / secret key pair.
///
/// The `Debug` implementation redacts the secret key so credentials can be
/// carried inside structs that are logged.
///
/// # Examples
///
/// ```
/// use rgw_admin_auth::Credentials;
///
/// let creds = Credentials::new("AKIDEXAMPLE", "secret");
/// assert_eq!(creds.access_key(), "AKIDEXAMPLE");
/// assert!(!format!("{creds:?}").contains("secret\""));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key: String,
    secret_key: String,
}

impl Credentials {
    /// Create a new credential pair.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// The access key id, sent in clear in the `Credential=` component.
    #[must_use]
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// The secret key, only ever used as HMAC key material.
    #[must_use]
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
