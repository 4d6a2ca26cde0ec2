//! Admin API data types for RADOS Gateway.
//!
//! Each resource type carries the builders for the operations that act on
//! it. A builder validates its required fields and returns the ordered
//! [`QueryArgs`] the client sends; the same types decode the gateway's JSON
//! replies.
//!
//! # Modules
//!
//! - [`account`] - Accounts
//! - [`bucket`] - Buckets, policies, links and index checks
//! - [`error`] - Mapping of non-success responses to typed errors
//! - [`info`] - Cluster info
//! - [`query`] - Ordered query arguments
//! - [`quota`] - User, bucket and individual bucket quotas
//! - [`usage`] - Bandwidth usage
//! - [`user`] - Users, subusers, keys and capabilities
//! - [`validation`] - Argument validation errors

pub mod account;
pub mod bucket;
pub mod error;
pub mod info;
pub mod query;
pub mod quota;
pub mod usage;
pub mod user;
pub mod validation;

pub use account::Account;
pub use bucket::{Bucket, BucketLinkInput, CheckBucketIndexRequest, CheckBucketIndexResponse, Policy};
pub use error::{ErrorReason, ResponseError, StatusError, UnparsableResponse, parse_error_response};
pub use info::Info;
pub use query::{QueryArgs, QueryValue};
pub use quota::{QuotaSpec, QuotaType};
pub use usage::{Usage, UsageRequest};
pub use user::{KeyType, SubuserAccess, SubuserSpec, User, UserCapSpec, UserKeySpec};
pub use validation::ValidationError;
