//! AWS Signature Version 4 request signing for RADOS Gateway admin calls.
//!
//! The RGW admin API authenticates every request with SigV4 using a fixed
//! header set (`host;x-amz-content-sha256;x-amz-date`), an unsigned payload
//! and the `default`/`s3` region and service. This crate implements the
//! signing side of that contract.
//!
//! # Usage
//!
//! ```rust
//! use chrono::Utc;
//! use rgw_admin_auth::{Credentials, Signer};
//!
//! let mut request = http::Request::get("http://rgw.local:8080/admin/info?format=json")
//!     .body(())
//!     .unwrap();
//! let creds = Credentials::new("AKIDEXAMPLE", "secret");
//! Signer::default().sign(&mut request, &creds, Utc::now()).unwrap();
//! assert!(request.headers().contains_key(http::header::AUTHORIZATION));
//! ```
//!
//! # Modules
//!
//! - [`canonical`] - Canonical request construction
//! - [`credentials`] - Access key / secret key pair
//! - [`error`] - Signing error types
//! - [`signer`] - Header injection and signature assembly
//! - [`sigv4`] - Key derivation and signature primitives

pub mod canonical;
pub mod credentials;
pub mod error;
pub mod signer;
pub mod sigv4;

pub use credentials::Credentials;
pub use error::AuthError;
pub use signer::{DEFAULT_REGION, DEFAULT_SERVICE, Signer, SigningOutput};
pub use sigv4::derive_signing_key;
