//! Async client for the RADOS Gateway admin API.
//!
//! # Usage
//!
//! ```no_run
//! use rgw_admin_client::RgwAdminClient;
//! use rgw_admin_model::User;
//!
//! # async fn run() -> rgw_admin_client::AdminResult<()> {
//! let client = RgwAdminClient::new("http://rgw.local:8080", "admin-ak", "admin-sk")?;
//! let user = client
//!     .get_user(&User {
//!         id: Some("alice".to_owned()),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{:?}", user.display_name);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`client`] - Request construction, signing and response mapping
//! - [`config`] - Client configuration and setup errors
//! - [`error`] - Operation error types
//! - [`path`] - Admin URL construction
//! - [`transport`] - HTTP transport abstraction

pub mod client;
pub mod config;
pub mod error;
mod ops;
pub mod path;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use client::RgwAdminClient;
pub use config::{AdminConfig, ConfigError};
pub use error::{AdminError, AdminResult};
pub use transport::{ReqwestTransport, Transport, TransportError};
